//! Tests for the callable service object convention

use async_trait::async_trait;

use apikit::{Error, Result, Service};

/// Service that doubles its argument
struct Doubler {
    value: i32,
}

#[async_trait]
impl Service for Doubler {
    type Output = i32;

    async fn call(&mut self) -> Result<i32> {
        Ok(self.value * 2)
    }
}

/// Service that always fails
struct AlwaysFails;

#[async_trait]
impl Service for AlwaysFails {
    type Output = ();

    async fn call(&mut self) -> Result<()> {
        Err("oops".into())
    }
}

#[tokio::test]
async fn run_captures_the_result_of_a_successful_call() {
    let outcome = Doubler { value: 21 }.run().await;

    assert!(outcome.success());
    assert_eq!(outcome.result, Some(42));
    assert!(outcome.error.is_none());
}

#[tokio::test]
async fn run_captures_failures_without_propagating() {
    let outcome = AlwaysFails.run().await;

    assert!(!outcome.success());
    assert!(outcome.result.is_none());
    assert_eq!(outcome.error.as_deref(), Some("oops"));
}

#[tokio::test]
async fn call_is_the_raising_path() {
    let error = AlwaysFails.call().await.unwrap_err();
    assert!(matches!(error, Error::Operation { .. }));
    assert_eq!(error.to_string(), "oops");
}

#[tokio::test]
async fn services_compose_with_question_mark() {
    async fn orchestrate() -> Result<i32> {
        let doubled = Doubler { value: 4 }.call().await?;
        Ok(doubled + 1)
    }

    assert_eq!(orchestrate().await.unwrap(), 9);
}
