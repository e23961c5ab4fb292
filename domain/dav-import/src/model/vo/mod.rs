mod upload_file;

#[rustfmt::skip]
pub use {
    upload_file::UploadFile,
};
