/// Movie identifiers are opaque strings (UUID v4 for server-created records).
pub type MovieId = String;
