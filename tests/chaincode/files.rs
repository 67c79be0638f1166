//! User registries and transfers through the dispatcher.

use asset_ledger::{ChaincodeError, FileLedger, UserFileRegistry};

use crate::support::{chaincode, invoke, ok};

fn registry(cc: &asset_ledger::Chaincode<asset_ledger::InMemoryLedger>, user: &str) -> UserFileRegistry {
    FileLedger::new(cc.ledger()).registry(user).unwrap()
}

#[test]
fn duplicate_user_fails_already_exists() {
    let cc = chaincode();
    ok(&cc, "createUser", &["u1"]);

    let result = cc.dispatch("createUser", &["u1".to_string()]);
    assert!(matches!(result, Err(ChaincodeError::AlreadyExists(ref k)) if k == "u1"));
    assert!(registry(&cc, "u1").is_empty());
}

#[test]
fn files_accumulate_and_overwrite_individually() {
    let cc = chaincode();
    ok(&cc, "createUser", &["u1"]);
    ok(&cc, "createFile", &["u1", "f1", "h1", "a.txt", "pw1", "10"]);
    ok(&cc, "createFile", &["u1", "f2", "h2", "b.txt", "pw2", "20"]);

    let files = registry(&cc, "u1");
    assert_eq!(files.get("f1").unwrap().name, "a.txt");
    assert_eq!(files.get("f2").unwrap().name, "b.txt");

    ok(&cc, "createFile", &["u1", "f1", "h9", "z.txt", "pw9", "99"]);
    let files = registry(&cc, "u1");
    assert_eq!(files.len(), 2);
    assert_eq!(files.get("f1").unwrap().hash, "h9");
    assert_eq!(files.get("f1").unwrap().count, "99");
    assert_eq!(files.get("f2").unwrap().hash, "h2");
}

#[test]
fn stored_registry_uses_sha256_key() {
    let cc = chaincode();
    ok(&cc, "createFile", &["u1", "f1", "h1", "a.txt", "pw1", "10"]);

    let raw: serde_json::Value =
        serde_json::from_slice(&asset_ledger::Ledger::get_state(cc.ledger(), "u1").unwrap()).unwrap();
    assert_eq!(raw["f1"]["sha256"], "h1");
    assert_eq!(raw["f1"]["count"], "10");
}

#[test]
fn create_file_requires_six_arguments() {
    let cc = chaincode();
    let response = invoke(&cc, "createFile", &["u1", "f1", "h1"]);
    assert!(!response.is_ok());
    assert!(response.message.contains("expecting 6"));
}

#[test]
fn transfer_applies_literal_arithmetic() {
    let cc = chaincode();
    ok(&cc, "createUser", &["u1"]);
    ok(&cc, "createUser", &["u2"]);
    ok(&cc, "createFile", &["u1", "f1", "h1", "a.txt", "pw1", "10"]);

    ok(&cc, "transferFile", &["u1", "u2", "f1", "3"]);

    assert_eq!(registry(&cc, "u1").get("f1").unwrap().count, "7");
    assert_eq!(registry(&cc, "u2").get("f1").unwrap().count, "3");
}

#[test]
fn transfer_replaces_rather_than_sums_target_balance() {
    let cc = chaincode();
    ok(&cc, "createFile", &["u1", "f1", "h1", "a.txt", "pw1", "10"]);
    ok(&cc, "createFile", &["u2", "f1", "h1", "a.txt", "pw1", "50"]);
    ok(&cc, "createFile", &["u2", "f2", "h2", "b.txt", "pw2", "5"]);

    ok(&cc, "transferFile", &["u1", "u2", "f1", "3"]);

    let target = registry(&cc, "u2");
    assert_eq!(target.get("f1").unwrap().count, "3");
    assert_eq!(target.get("f2").unwrap().count, "5");
}

#[test]
fn repeated_transfers_keep_decrementing_source() {
    let cc = chaincode();
    ok(&cc, "createFile", &["u1", "f1", "h1", "a.txt", "pw1", "10"]);

    ok(&cc, "transferFile", &["u1", "u2", "f1", "3"]);
    ok(&cc, "transferFile", &["u1", "u2", "f1", "2"]);

    assert_eq!(registry(&cc, "u1").get("f1").unwrap().count, "5");
    assert_eq!(registry(&cc, "u2").get("f1").unwrap().count, "2");
}

#[test]
fn transfer_of_unknown_file_fails() {
    let cc = chaincode();
    ok(&cc, "createUser", &["u1"]);

    let result = cc.dispatch(
        "transferFile",
        &["u1", "u2", "nope", "1"].map(String::from),
    );
    assert!(matches!(result, Err(ChaincodeError::NotFound(_))));
}

#[test]
fn transfer_requires_four_arguments() {
    let cc = chaincode();
    let result = cc.dispatch("transferFile", &["u1", "u2", "f1"].map(String::from));
    assert!(matches!(
        result,
        Err(ChaincodeError::InvalidArgumentCount { expected: 4, actual: 3, .. })
    ));
}
