use std::io::Cursor;

use tally_cli::Session;
use tally_core::{AccountId, Money};
use tally_infra::{InMemoryStore, Ledger};

fn run_script(ledger: &mut Ledger<InMemoryStore>, script: &str) -> String {
    let mut output = Vec::new();
    Session::new(ledger, Cursor::new(script.as_bytes()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn id(s: &str) -> AccountId {
    AccountId::parse(s).unwrap()
}

fn money(s: &str) -> Money {
    s.parse().unwrap()
}

#[test]
fn full_walkthrough() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    let out = run_script(
        &mut ledger,
        "1\n1001\n2\n1001\n100.0\n3\n1001\n40\n4\n1001\n5\n",
    );

    assert!(out.starts_with("Welcome to tally!\n"));
    assert!(out.contains("Account created."));
    assert!(out.contains("Deposited 100.00. New balance: 100.00."));
    assert!(out.contains("Withdrew 40.00. New balance: 60.00."));
    assert!(out.contains("Balance of account 1001: 60.00"));
    assert!(out.trim_end().ends_with("Leaving tally..."));

    assert_eq!(ledger.balance(&id("1001")).unwrap(), money("60"));
}

#[test]
fn failures_are_reported_and_the_loop_continues() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    let out = run_script(
        &mut ledger,
        "1\nA\n1\nA\n4\nghost\n3\nA\n5\n9\n5\n",
    );

    assert!(out.contains("Account already exists."));
    assert!(out.contains("Account not found."));
    assert!(out.contains("Insufficient funds (balance 0.00)."));
    assert!(out.contains("Invalid option."));
    assert_eq!(ledger.balance(&id("A")).unwrap(), Money::ZERO);
}

#[test]
fn unparseable_amount_counts_as_zero_and_is_rejected() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    let out = run_script(&mut ledger, "1\nA\n2\nA\nlots\n5\n");

    assert!(out.contains("Invalid amount: amount must be positive, got 0.00."));
    assert_eq!(ledger.balance(&id("A")).unwrap(), Money::ZERO);
}

#[test]
fn invalid_identifier_is_reported() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    let out = run_script(&mut ledger, "1\na,b\n5\n");

    assert_eq!(out.matches("Invalid account number:").count(), 1);
    assert!(ledger.is_empty());
}

#[test]
fn blank_identifier_is_an_ordinary_account() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    let out = run_script(&mut ledger, "1\n\n2\n\n5\n5\n");

    assert!(out.contains("Account created."));
    assert!(out.contains("Deposited 5.00. New balance: 5.00."));
    assert_eq!(ledger.balance(&id("")).unwrap(), money("5"));
    assert_eq!(
        ledger.store().contents().unwrap().lines().collect::<Vec<_>>(),
        vec![",5.00"]
    );
}

#[test]
fn end_of_input_ends_the_session() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    let out = run_script(&mut ledger, "1\nA\n2\nA\n");

    assert!(out.contains("Account created."));
    assert!(out.trim_end().ends_with("Leaving tally..."));
    assert_eq!(ledger.balance(&id("A")).unwrap(), Money::ZERO);
}

#[test]
fn session_writes_through_to_the_store() {
    let mut ledger = Ledger::open(InMemoryStore::new()).unwrap();
    run_script(&mut ledger, "1\nA\n2\nA\n12.5\n5\n");

    let contents = ledger.store().contents().unwrap();
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec!["A,12.50"]);
}
