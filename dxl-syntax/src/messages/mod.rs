mod parse;

pub(crate) use self::parse::Message;
