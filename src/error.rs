#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Build an error whose message carries the caller's file/line plus a
    /// function name:
    ///
    /// `error:    in file 'FILE:LINE' in function 'FN':    MESSAGE`
    ///
    /// This is the diagnostic format the collaborator contract errors use.
    #[track_caller]
    pub fn at_caller(exit_code: u8, function: &str, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            exit_code,
            message: format!(
                "error:    in file '{}:{}' in function '{}':    {}",
                loc.file(),
                loc.line(),
                function,
                message.into()
            ),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
