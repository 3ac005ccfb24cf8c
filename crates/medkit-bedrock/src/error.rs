use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use thiserror::Error;

use medkit_core::generation::FailureKind;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("bedrock unavailable: {0}")]
    Unavailable(String),

    #[error("bedrock rejected the request: {0}")]
    Rejected(String),

    #[error("request could not be built: {0}")]
    Request(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl BedrockError {
    /// The failure class reported to the pipeline.
    pub fn kind(&self) -> FailureKind {
        match self {
            BedrockError::Unavailable(_) => FailureKind::BackendUnavailable,
            BedrockError::Rejected(_) | BedrockError::Request(_) => FailureKind::BackendRejected,
            BedrockError::ResponseParse(_) => FailureKind::MalformedResponse,
        }
    }
}

impl<R> From<SdkError<ConverseError, R>> for BedrockError
where
    R: std::fmt::Debug,
{
    fn from(err: SdkError<ConverseError, R>) -> Self {
        match err {
            SdkError::ServiceError(service_err) => from_service_error(service_err.into_err()),
            SdkError::DispatchFailure(e) => BedrockError::Unavailable(format!("dispatch failure: {e:?}")),
            SdkError::TimeoutError(_) => BedrockError::Unavailable("request timed out".to_string()),
            SdkError::ResponseError(e) => {
                BedrockError::ResponseParse(format!("unreadable response: {e:?}"))
            }
            SdkError::ConstructionFailure(e) => {
                BedrockError::Request(format!("construction failure: {e:?}"))
            }
            other => BedrockError::Unavailable(format!("{other:?}")),
        }
    }
}

/// Sort a service error into "could not be served right now" versus an
/// explicit refusal of this request.
pub fn from_service_error(err: ConverseError) -> BedrockError {
    match err {
        ConverseError::ThrottlingException(e) => BedrockError::Unavailable(format!("throttled: {e}")),
        ConverseError::ServiceUnavailableException(e) => {
            BedrockError::Unavailable(format!("service unavailable: {e}"))
        }
        ConverseError::ModelNotReadyException(e) => {
            BedrockError::Unavailable(format!("model not ready: {e}"))
        }
        ConverseError::ModelTimeoutException(e) => {
            BedrockError::Unavailable(format!("model timed out: {e}"))
        }
        ConverseError::InternalServerException(e) => {
            BedrockError::Unavailable(format!("internal server error: {e}"))
        }
        ConverseError::ValidationException(e) => BedrockError::Rejected(format!("validation: {e}")),
        ConverseError::AccessDeniedException(e) => {
            BedrockError::Rejected(format!("access denied: {e}"))
        }
        ConverseError::ResourceNotFoundException(e) => {
            BedrockError::Rejected(format!("resource not found: {e}"))
        }
        ConverseError::ModelErrorException(e) => BedrockError::Rejected(format!("model error: {e}")),
        other => BedrockError::Rejected(other.to_string()),
    }
}
