use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("JSON {0}")]
    Json(String),
    #[error("System error {0}")]
    SystemError(#[from] SystemError),
    #[error("Can't search an empty string")]
    EmptyQuery,
    #[error("Query has {0} characters, searches need at least {1}")]
    QueryTooShort(usize, usize),
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Holds the error types that aren't `Clone` behind an `Rc` so `AppError` can be cloned
/// into signals.
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    #[cfg(not(feature = "csr"))]
    ReqwestError(Rc<reqwest::Error>),
    #[cfg(feature = "csr")]
    GlooError(Rc<gloo_net::Error>),
    Anyhow(Rc<anyhow::Error>),
}

impl From<anyhow::Error> for SystemError {
    fn from(value: anyhow::Error) -> Self {
        Self::Anyhow(Rc::new(value))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(not(feature = "csr"))]
impl From<reqwest::Error> for SystemError {
    fn from(value: reqwest::Error) -> Self {
        Self::ReqwestError(Rc::new(value))
    }
}

#[cfg(not(feature = "csr"))]
impl From<reqwest::Error> for AppError {
    fn from(value: reqwest::Error) -> Self {
        Self::SystemError(value.into())
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

#[cfg(feature = "csr")]
impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        Self::SystemError(value.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            #[cfg(not(feature = "csr"))]
            SystemError::ReqwestError(reqwest) => write!(f, "{}", reqwest),
            #[cfg(feature = "csr")]
            SystemError::GlooError(g) => write!(f, "{}", g),
            SystemError::Anyhow(anyhow) => write!(f, "{}", anyhow),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            #[cfg(not(feature = "csr"))]
            SystemError::ReqwestError(reqwest) => Some(reqwest.as_ref()),
            #[cfg(feature = "csr")]
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
            SystemError::Anyhow(anyhow) => Some(anyhow.root_cause()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
