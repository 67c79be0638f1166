//! Store failures propagate verbatim and are never retried.

use asset_ledger::{Chaincode, ChaincodeError, FileLedger, InMemoryLedger, StoreError};

use crate::support::{ok, FlakyLedger};

fn flaky() -> Chaincode<FlakyLedger> {
    Chaincode::new(FlakyLedger::new(InMemoryLedger::new()))
}

#[test]
fn read_failure_surfaces_as_store_error() {
    let cc = flaky();
    cc.ledger().fail_reads();

    let result = cc.dispatch("queryCar", &["CAR0".to_string()]);
    assert!(matches!(result, Err(ChaincodeError::Store(StoreError::Backend(ref m))) if m.contains("CAR0")));
}

#[test]
fn scan_failure_surfaces_as_store_error() {
    let cc = flaky();
    cc.ledger().fail_reads();
    assert!(matches!(cc.dispatch("queryAllCars", &[]), Err(ChaincodeError::Store(_))));
}

#[test]
fn write_failure_surfaces_as_store_error() {
    let cc = flaky();
    cc.ledger().allow_puts(0);

    let result = cc.dispatch("createUser", &["u1".to_string()]);
    assert!(matches!(result, Err(ChaincodeError::Store(_))));
}

#[test]
fn transfer_has_no_rollback_when_second_put_fails() {
    let cc = flaky();
    ok(&cc, "createFile", &["u1", "f1", "h1", "a.txt", "pw1", "10"]);
    cc.ledger().allow_puts(1);

    let result = cc.dispatch("transferFile", &["u1", "u2", "f1", "3"].map(String::from));
    assert!(matches!(result, Err(ChaincodeError::Store(_))));

    // Target was written first; the source write was refused.
    let files = FileLedger::new(&cc.ledger().inner);
    assert_eq!(files.registry("u2").unwrap().get("f1").unwrap().count, "3");
    assert_eq!(files.registry("u1").unwrap().get("f1").unwrap().count, "10");
}
