use aula_client::ApiError;
use thiserror::Error;

/// Fatal page-load failure.
///
/// Only the primary signal (course metadata) can produce this; secondary
/// signal failures degrade to defaults inside the reconciler instead.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to load course: {0}")]
    CourseUnavailable(#[source] ApiError),
}

/// Local form-validation failure. Each variant carries its own user-facing
/// reason; none of these reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("full name is required")]
    MissingFullName,

    #[error("email address is required")]
    MissingEmail,

    #[error("phone number is required")]
    MissingPhone,

    #[error("school name is required")]
    MissingSchool,

    #[error("motivation statement is required")]
    MissingMotivation,

    #[error("a supporting document must be attached")]
    MissingDocument,
}

/// Failure of a mutating flow. Prior state is left untouched by the caller;
/// retries are manual.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("submission failed: {0}")]
    Api(#[from] ApiError),
}
