pub const UPLOAD_FIELD_NAME: &str = "file";
