use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    InvalidRequest,
    NotFound,
    InsufficientStock { available: i32 },
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::InvalidRequest => write!(f, "Invalid request"),
            KernelError::NotFound => write!(f, "Book not found"),
            KernelError::InsufficientStock { available } => {
                write!(f, "Insufficient stock, {available} left")
            }
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
