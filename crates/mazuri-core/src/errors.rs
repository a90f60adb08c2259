use thiserror::Error;

/// Result type alias using MazuriError
pub type Result<T> = std::result::Result<T, MazuriError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// A stable classification of every error the bar tool can report. Each kind
/// maps to a stable error code that logging and tests match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Integration/IO
    Io,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification fields used for structured logging alongside a
/// human-readable message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for bar inventory operations
///
/// Display strings are the exact text shown to the operator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MazuriError {
    // ===== Not Found =====
    #[error("Cocktail with ID {id} not found!")]
    CocktailNotFound { id: i64 },

    #[error("Customer with ID {id} not found!")]
    CustomerNotFound { id: i64 },

    #[error("Order with ID {id} not found!")]
    OrderNotFound { id: i64 },

    // ===== Validation Errors =====
    /// A field failed command-boundary validation
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    /// A status string outside {pending, completed, cancelled}
    #[error("Invalid order status '{value}' (expected pending, completed or cancelled)")]
    InvalidStatus { value: String },

    // ===== Constraint Errors =====
    #[error("A cocktail named '{name}' already exists")]
    DuplicateCocktailName { name: String },

    #[error("A customer with email '{email}' already exists")]
    DuplicateCustomerEmail { email: String },

    /// Delete refused because orders still point at the record
    #[error("Cannot delete {entity} with ID {id}: {orders} order(s) still reference it")]
    StillReferenced {
        entity: String,
        id: i64,
        orders: i64,
    },

    // ===== Store Errors =====
    #[error("Database error: {message}")]
    Persistence { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}

impl MazuriError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        MazuriError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ExErrorKind {
        match self {
            MazuriError::CocktailNotFound { .. }
            | MazuriError::CustomerNotFound { .. }
            | MazuriError::OrderNotFound { .. } => ExErrorKind::NotFound,
            MazuriError::InvalidInput { .. } | MazuriError::InvalidStatus { .. } => {
                ExErrorKind::InvalidInput
            }
            MazuriError::DuplicateCocktailName { .. }
            | MazuriError::DuplicateCustomerEmail { .. } => ExErrorKind::AlreadyExists,
            MazuriError::StillReferenced { .. } => ExErrorKind::ConstraintViolation,
            MazuriError::Persistence { .. } => ExErrorKind::Persistence,
            MazuriError::Io { .. } => ExErrorKind::Io,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ExErrorKind::NotFound
    }
}

/// Conversion from MazuriError to ExError
impl From<MazuriError> for ExError {
    fn from(err: MazuriError) -> Self {
        let ex = ExError::new(err.kind()).with_message(err.to_string());
        match err {
            MazuriError::CocktailNotFound { id } => ex
                .with_op("find_cocktail")
                .with_entity_id(id.to_string()),
            MazuriError::CustomerNotFound { id } => ex
                .with_op("find_customer")
                .with_entity_id(id.to_string()),
            MazuriError::OrderNotFound { id } => {
                ex.with_op("find_order").with_entity_id(id.to_string())
            }
            MazuriError::StillReferenced { id, .. } => ex.with_entity_id(id.to_string()),
            MazuriError::DuplicateCocktailName { name } => ex.with_entity_id(name),
            MazuriError::Persistence { .. } => ex.with_op("sqlite"),
            _ => ex,
        }
    }
}

impl From<&MazuriError> for ExError {
    fn from(err: &MazuriError) -> Self {
        err.clone().into()
    }
}

impl From<std::io::Error> for MazuriError {
    fn from(err: std::io::Error) -> Self {
        MazuriError::Io {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
            (ExErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
            (ExErrorKind::Io, "ERR_IO"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_not_found_message_matches_operator_text() {
        let err = MazuriError::CocktailNotFound { id: 7 };
        assert_eq!(err.to_string(), "Cocktail with ID 7 not found!");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_conversion_carries_entity_and_kind() {
        let ex: ExError = MazuriError::OrderNotFound { id: 3 }.into();
        assert_eq!(ex.kind(), ExErrorKind::NotFound);
        assert_eq!(ex.entity_id(), Some("3"));
        assert_eq!(ex.op(), Some("find_order"));
    }

    #[test]
    fn test_still_referenced_is_constraint_violation() {
        let err = MazuriError::StillReferenced {
            entity: "customer".to_string(),
            id: 1,
            orders: 2,
        };
        assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
        assert!(err.to_string().contains("2 order(s)"));
    }

    #[test]
    fn test_io_error_converts_to_io_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only mount");

        let err: MazuriError = io.into();

        assert!(matches!(err, MazuriError::Io { .. }));
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert!(err.to_string().contains("read-only mount"));
    }

    #[test]
    fn test_ex_error_display() {
        let ex = ExError::new(ExErrorKind::Persistence)
            .with_op("sqlite")
            .with_message("disk I/O error");
        assert_eq!(
            ex.to_string(),
            "[ERR_PERSISTENCE] in operation 'sqlite': disk I/O error"
        );
    }
}
