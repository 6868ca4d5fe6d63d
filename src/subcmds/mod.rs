pub(crate) mod ls;
pub(crate) mod pick;
pub(crate) mod unclip;
