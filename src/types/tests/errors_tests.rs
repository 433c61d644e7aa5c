use crate::types::errors::EngineError;

#[test]
fn test_engine_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.csv");
    let err = EngineError::from(io_err);

    match err {
        EngineError::Io(inner) => {
            assert!(inner.to_string().contains("catalog.csv"));
        }
        _ => panic!("Expected EngineError::Io"),
    }
}

#[test]
fn test_engine_error_serialization() {
    let err = EngineError::EmptyCatalog("no variants after load".to_string());

    // EngineError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Catalog is empty: no variants after load\"");
}
