pub mod login_form;
pub mod upload_form;

pub use login_form::LoginForm;
pub use upload_form::UploadForm;
