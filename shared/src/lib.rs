pub mod error;
pub mod models;
pub mod tally;
pub mod document;
pub mod validation;
pub mod landing;

pub use error::{Error, ErrorCode, Result, ErrorResponse};
pub use models::*;
pub use tally::{TallyStore, TallyError, VoteTally};
pub use document::{ResultsDocument, DocumentError, DocumentStats};
pub use validation::*;
pub use landing::{UploadStatus, upload_status, greeting};

#[cfg(feature = "backend")]
mod backend_impl {
    use rocket::request::FromParam;
    use crate::models::ItemKind;
    use crate::tally::TallyError;

    impl<'a> FromParam<'a> for ItemKind {
        type Error = TallyError;

        fn from_param(param: &'a str) -> Result<Self, Self::Error> {
            param.parse()
        }
    }
}
