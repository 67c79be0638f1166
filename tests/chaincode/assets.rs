//! Car lifecycle through the dispatcher.

use asset_ledger::{Car, ChaincodeError};

use crate::support::{chaincode, invoke, ok};

#[test]
fn create_then_query_round_trips() {
    let cc = chaincode();
    ok(&cc, "createCar", &["CAR0", "Toyota", "Prius", "blue", "Tomoko"]);

    let car: Car = serde_json::from_slice(&ok(&cc, "queryCar", &["CAR0"])).unwrap();
    assert_eq!(car, Car::new("Toyota", "Prius", "blue", "Tomoko"));
    assert_eq!(car.doc_type, "car");
}

#[test]
fn second_create_overwrites() {
    let cc = chaincode();
    ok(&cc, "createCar", &["CAR0", "Toyota", "Prius", "blue", "Tomoko"]);
    ok(&cc, "createCar", &["CAR0", "Ford", "Mustang", "red", "Brad"]);

    let car: Car = serde_json::from_slice(&ok(&cc, "queryCar", &["CAR0"])).unwrap();
    assert_eq!(car.make, "Ford");
    assert_eq!(car.model, "Mustang");
    assert_eq!(car.color, "red");
    assert_eq!(car.owner, "Brad");
}

#[test]
fn create_returns_empty_payload() {
    let cc = chaincode();
    let payload = ok(&cc, "createCar", &["CAR0", "Toyota", "Prius", "blue", "Tomoko"]);
    assert!(payload.is_empty());
}

#[test]
fn create_with_wrong_arity_fails() {
    let cc = chaincode();
    let result = cc.dispatch("createCar", &["CAR0".to_string()]);
    assert!(matches!(
        result,
        Err(ChaincodeError::InvalidArgumentCount { expected: 5, actual: 1, .. })
    ));

    let response = invoke(&cc, "createCar", &["CAR0"]);
    assert!(response.message.contains("expecting 5"));
}

#[test]
fn query_missing_car_fails_not_found() {
    let cc = chaincode();
    let result = cc.dispatch("queryCar", &["MISSING".to_string()]);
    assert!(matches!(result, Err(ChaincodeError::NotFound(ref k)) if k == "MISSING"));
}

#[test]
fn change_owner() {
    let cc = chaincode();
    ok(&cc, "createCar", &["CAR4", "Tesla", "S", "black", "Adriana"]);
    ok(&cc, "changeCarowner", &["CAR4", "Dave"]);

    let car: Car = serde_json::from_slice(&ok(&cc, "queryCar", &["CAR4"])).unwrap();
    assert_eq!(car.owner, "Dave");
    assert_eq!(car.make, "Tesla");
}

#[test]
fn change_owner_accepts_camel_case_alias() {
    let cc = chaincode();
    ok(&cc, "createCar", &["CAR4", "Tesla", "S", "black", "Adriana"]);
    ok(&cc, "changeCarOwner", &["CAR4", "Eve"]);

    let car: Car = serde_json::from_slice(&ok(&cc, "queryCar", &["CAR4"])).unwrap();
    assert_eq!(car.owner, "Eve");
}

#[test]
fn change_owner_of_missing_car_fails() {
    let cc = chaincode();
    let result = cc.dispatch("changeCarowner", &["CAR9".to_string(), "Dave".to_string()]);
    assert!(matches!(result, Err(ChaincodeError::NotFound(_))));
}

#[test]
fn change_owner_requires_two_arguments() {
    let cc = chaincode();
    let response = invoke(&cc, "changeCarowner", &["CAR9"]);
    assert!(!response.is_ok());
    assert!(response.message.contains("expecting 2"));
}
