//! Request builders and response parsers for the todo API.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, ErrorBody, Message, Todo, UpdateTodo};

/// Stateless client for the todo API. See the crate docs for the
/// build/execute/parse cycle.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update_todo(&self, id: u64, input: &UpdateTodo) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        decode(response, 200)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response, 200)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response, 201)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        decode(response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<Message, ApiError> {
        decode(response, 200)
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(response, expected)
        .and_then(|body| serde_json::from_str(&body).map_err(ApiError::Deserialization))
}

/// Return the body when the status is the expected one, otherwise map the
/// status to an `ApiError`.
fn check_status(response: HttpResponse, expected: u16) -> Result<String, ApiError> {
    match response.status {
        status if status == expected => Ok(response.body),
        404 => Err(ApiError::NotFound),
        400 => {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .map(|body| body.error)
                .unwrap_or(response.body);
            Err(ApiError::BadRequest(message))
        }
        status => Err(ApiError::HttpError {
            status,
            body: response.body,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:5000")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_todo_produces_correct_request() {
        let req = client().build_get_todo(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:5000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = CreateTodo {
            title: "Buy milk".to_string(),
        };
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:5000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Buy milk" }));
    }

    #[test]
    fn build_update_todo_omits_absent_fields() {
        let input = UpdateTodo {
            title: Some("Updated".to_string()),
            completed: None,
        };
        let req = client().build_update_todo(3, &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:5000/todos/3");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Updated" }));
    }

    #[test]
    fn build_delete_todo_produces_correct_request() {
        let req = client().build_delete_todo(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:5000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn method_names_are_canonical() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
    }

    #[test]
    fn parse_list_todos_success() {
        let response = HttpResponse::new(200, r#"[{"id":1,"title":"Test","completed":false}]"#);
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(
            todos,
            vec![Todo {
                id: 1,
                title: "Test".to_string(),
                completed: false,
            }]
        );
    }

    #[test]
    fn parse_get_todo_not_found() {
        let response = HttpResponse::new(404, r#"{"error":"Todo not found"}"#);
        let err = client().parse_get_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_todo_success() {
        let response = HttpResponse::new(201, r#"{"id":1,"title":"New","completed":false}"#);
        let todo = client().parse_create_todo(response).unwrap();
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "New");
    }

    #[test]
    fn parse_create_todo_bad_request_carries_message() {
        let response = HttpResponse::new(400, r#"{"error":"Title is required"}"#);
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "Title is required"));
    }

    #[test]
    fn parse_bad_request_falls_back_to_raw_body() {
        let response = HttpResponse::new(400, "nope");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg == "nope"));
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_update_todo_success() {
        let response = HttpResponse::new(200, r#"{"id":1,"title":"Updated","completed":true}"#);
        let todo = client().parse_update_todo(response).unwrap();
        assert_eq!(todo.title, "Updated");
        assert!(todo.completed);
    }

    #[test]
    fn parse_delete_todo_returns_message() {
        let response = HttpResponse::new(200, r#"{"message":"Todo deleted"}"#);
        let message = client().parse_delete_todo(response).unwrap();
        assert_eq!(message.message, "Todo deleted");
    }

    #[test]
    fn parse_delete_todo_not_found() {
        let response = HttpResponse::new(404, "");
        let err = client().parse_delete_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.build_list_todos().path, "http://localhost:5000/todos");
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
