//! Catalog and loan service tests

use biblioteca_server::{
    models::{CreateBook, CreateLoan, LoanStatus},
    AppError,
};
use chrono::{Duration, Utc};

use crate::common::test_state;

#[tokio::test]
async fn test_add_book_sets_registration_time() {
    let state = test_state().await;

    let before = Utc::now();
    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    let after = Utc::now();

    assert!(book.registered_at >= before);
    assert!(book.registered_at <= after);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.publication_date.to_string(), "1965-08-01");
}

#[tokio::test]
async fn test_add_book_rejects_bad_input() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    let err = catalog
        .add_book(CreateBook::new("Dune", "Herbert", "August 1965"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let err = catalog
        .add_book(CreateBook::new("", "Herbert", "1965-08-01"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert!(catalog.list_books().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_books_most_recent_first() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    catalog
        .add_book(CreateBook::new("Emma", "Austen", "1815-12-23"))
        .await
        .unwrap();
    catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();

    let titles: Vec<String> = catalog
        .list_books()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["Dune", "Emma"]);
}

#[tokio::test]
async fn test_remove_book() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    let book = catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();

    catalog.remove_book(book.id).await.unwrap();
    assert!(catalog.list_books().await.unwrap().is_empty());

    let err = catalog.remove_book(book.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_removed_book_ids_are_not_reused() {
    let state = test_state().await;
    let catalog = &state.services.catalog;

    let first = catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    catalog.remove_book(first.id).await.unwrap();

    let second = catalog
        .add_book(CreateBook::new("Emma", "Austen", "1815-12-23"))
        .await
        .unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_remove_book_with_loans_is_refused() {
    let state = test_state().await;

    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    let loan = state
        .services
        .loans
        .create_loan(book.id, CreateLoan::new("Ana", "123"))
        .await
        .unwrap();

    let err = state.services.catalog.remove_book(book.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Returned loans still keep the book in the catalog
    state.services.loans.return_loan(loan.id).await.unwrap();
    let err = state.services.catalog.remove_book(book.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert_eq!(state.services.catalog.list_books().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_loan_due_in_fourteen_days() {
    let state = test_state().await;

    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    let loan = state
        .services
        .loans
        .create_loan(book.id, CreateLoan::new(" Ana ", "123"))
        .await
        .unwrap();

    assert_eq!(loan.due_at - loan.loaned_at, Duration::days(14));
    assert_eq!(loan.student_name, "Ana");
    assert!(!loan.returned);
    assert!(loan.returned_at.is_none());
    assert_eq!(loan.book_id, book.id);
}

#[tokio::test]
async fn test_create_loan_for_missing_book() {
    let state = test_state().await;

    let err = state
        .services
        .loans
        .create_loan(99, CreateLoan::new("Ana", "123"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert!(state.services.loans.list_loans().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_same_book_can_be_lent_twice() {
    let state = test_state().await;

    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    let loans = &state.services.loans;
    loans
        .create_loan(book.id, CreateLoan::new("Ana", "123"))
        .await
        .unwrap();
    loans
        .create_loan(book.id, CreateLoan::new("Ana", "123"))
        .await
        .unwrap();

    assert_eq!(loans.count_active().await.unwrap(), 2);
}

#[tokio::test]
async fn test_return_loan() {
    let state = test_state().await;
    let loans = &state.services.loans;

    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    let loan = loans
        .create_loan(book.id, CreateLoan::new("Ana", "123"))
        .await
        .unwrap();

    let returned = loans.return_loan(loan.id).await.unwrap();
    assert!(returned.returned);
    let returned_at = returned.returned_at.expect("return time set");

    // Second return is rejected and leaves the original timestamp alone
    let err = loans.return_loan(loan.id).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
    let stored = state.services.repository.loans.get_by_id(loan.id).await.unwrap();
    assert_eq!(stored.returned_at, Some(returned_at));

    let err = loans.return_loan(loan.id + 1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_overdue_counts() {
    let state = test_state().await;

    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();

    let repository = &state.services.repository;
    let long_ago = Utc::now() - Duration::days(30);
    let late = repository
        .loans
        .create(book.id, &CreateLoan::new("Ana", "123"), long_ago)
        .await
        .unwrap();
    state
        .services
        .loans
        .create_loan(book.id, CreateLoan::new("Bia", "456"))
        .await
        .unwrap();

    assert_eq!(late.status(Utc::now()), LoanStatus::Overdue);
    assert_eq!(state.services.loans.count_active().await.unwrap(), 2);
    assert_eq!(state.services.loans.count_overdue().await.unwrap(), 1);

    state.services.loans.return_loan(late.id).await.unwrap();
    assert_eq!(state.services.loans.count_overdue().await.unwrap(), 0);
}

#[tokio::test]
async fn test_loan_lifecycle() {
    let state = test_state().await;

    let book = state
        .services
        .catalog
        .add_book(CreateBook::new("Dune", "Herbert", "1965-08-01"))
        .await
        .unwrap();
    assert_eq!(state.services.catalog.list_books().await.unwrap()[0].id, book.id);

    let loan = state
        .services
        .loans
        .create_loan(book.id, CreateLoan::new("Ana", "123"))
        .await
        .unwrap();

    let listed = state.services.loans.list_loans().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].book_title, "Dune");
    assert_eq!(listed[0].due_at - listed[0].loaned_at, Duration::days(14));
    assert!(!listed[0].returned);

    state.services.loans.return_loan(loan.id).await.unwrap();

    let listed = state.services.loans.list_loans().await.unwrap();
    assert!(listed[0].returned);
    assert!(listed[0].returned_at.is_some());
    let far_future = Utc::now() + Duration::days(365);
    assert_eq!(listed[0].status(far_future), LoanStatus::Returned);
}
