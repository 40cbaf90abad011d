//! Driver error types

/// Serial driver error with code and message
///
/// The driver contract is otherwise error-free by policy: full-buffer
/// input, non-digit bytes during numeric parse and backspace on an
/// empty line are all absorbed silently. The only failure is a wait
/// strategy giving up on an unready transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// E01: Transport never reported ready within the wait budget
    TransportTimeout,
}

impl SerialError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::TransportTimeout => "E01",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::TransportTimeout => "transport timeout",
        }
    }
}

impl core::fmt::Display for SerialError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
