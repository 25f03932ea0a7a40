//! Output writers. Encoding happens after sampling; the core never sees file formats.

pub(crate) mod writer;
