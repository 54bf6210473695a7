use std::rc::Rc;

use common::error::{Operation, RemoteError};
use common::model::student::Student;
use common::remote::{collection_url, ensure_success, member_url, DeleteOutcome};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

/// Client for the remote student collection.
///
/// Every call takes the abort signal of the component that issued it. Once
/// the signal is aborted, the call resolves to `RemoteError::Aborted` even if
/// the response had already arrived, so stale results are never applied.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteCollection {
    base: Rc<str>,
}

impl RemoteCollection {
    pub fn new(base: &str) -> Self {
        Self {
            base: Rc::from(collection_url(base)),
        }
    }

    /// `GET /`
    pub async fn list(&self, signal: Option<&AbortSignal>) -> Result<Vec<Student>, RemoteError> {
        let request = Request::get(&self.base);
        let response = send(Operation::List, request, None, signal).await?;
        ensure_success(Operation::List, response.status())?;
        decode(Operation::List, response, signal).await
    }

    /// `POST /` with a record that has no id yet. Returns the stored record.
    pub async fn create(
        &self,
        student: &Student,
        signal: Option<&AbortSignal>,
    ) -> Result<Student, RemoteError> {
        let request = Request::post(&self.base);
        let response = send(Operation::Create, request, Some(student), signal).await?;
        ensure_success(Operation::Create, response.status())?;
        decode(Operation::Create, response, signal).await
    }

    /// `PUT /{id}` with the full record. Returns the stored record.
    pub async fn update(
        &self,
        id: &str,
        student: &Student,
        signal: Option<&AbortSignal>,
    ) -> Result<Student, RemoteError> {
        let request = Request::put(&member_url(&self.base, id));
        let response = send(Operation::Update, request, Some(student), signal).await?;
        ensure_success(Operation::Update, response.status())?;
        decode(Operation::Update, response, signal).await
    }

    /// `DELETE /{id}`. A 404 is reported as `DeleteOutcome::NotFound`.
    pub async fn delete(
        &self,
        id: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<DeleteOutcome, RemoteError> {
        let request = Request::delete(&member_url(&self.base, id));
        let response = send(Operation::Delete, request, None, signal).await?;
        DeleteOutcome::from_status(response.status())
    }
}

fn is_aborted(signal: Option<&AbortSignal>) -> bool {
    signal.is_some_and(|s| s.aborted())
}

async fn send(
    operation: Operation,
    request: RequestBuilder,
    body: Option<&Student>,
    signal: Option<&AbortSignal>,
) -> Result<Response, RemoteError> {
    let request = request.abort_signal(signal);
    let result = match body {
        Some(student) => match request.json(student) {
            Ok(request) => request.send().await,
            Err(e) => {
                return Err(RemoteError::Transport {
                    operation,
                    message: e.to_string(),
                })
            }
        },
        None => request.send().await,
    };

    if is_aborted(signal) {
        return Err(RemoteError::Aborted { operation });
    }
    result.map_err(|e| RemoteError::Transport {
        operation,
        message: e.to_string(),
    })
}

async fn decode<T: DeserializeOwned>(
    operation: Operation,
    response: Response,
    signal: Option<&AbortSignal>,
) -> Result<T, RemoteError> {
    let decoded = response.json::<T>().await;
    if is_aborted(signal) {
        return Err(RemoteError::Aborted { operation });
    }
    decoded.map_err(|e| RemoteError::Decode {
        operation,
        message: e.to_string(),
    })
}
