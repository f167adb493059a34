use agora_types::Stage;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("poll must be in stage {required:?} for this transition, but is in {actual:?}")]
    WrongStage { required: Stage, actual: Stage },

    #[error("a closed poll cannot be cancelled")]
    CancelAfterClose,

    #[error("voting method is locked once voting has opened")]
    MethodLocked,
}
