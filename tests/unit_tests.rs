use facility_sim::{
    error::FacilityError,
    facilities::{
        analytics::{CostSavings, MaintenanceStats},
        data::*,
        CycleRandom, FacilityGenerator, FacilityStore, StaticFacts,
    },
    WebConfig, DEFAULT_ANALYSIS_DELAY_MS, DEFAULT_FACILITY_COUNT, DEFAULT_WEB_PORT,
};
use std::time::Duration;

/// Test Facility serialization uses the camelCase wire names
#[test]
fn test_facility_serialization() {
    let mut generator = FacilityGenerator::with_source(CycleRandom::constant(0.5));
    let facility = generator.generate(3);

    let json = serde_json::to_value(&facility).expect("Should serialize to JSON");
    assert_eq!(json["id"], "NH3");
    assert_eq!(json["name"], "Facility 3");
    assert_eq!(json["location"], "Delhi-Jaipur Highway KM 123");
    assert_eq!(json["status"], "active");
    assert_eq!(json["userRating"], "5.5");
    assert_eq!(json["dailyUsers"], 600);
    assert_eq!(json["sensors"]["cleanlinessScore"], 6);
    assert_eq!(json["sensors"]["airQuality"], 50);
    assert_eq!(json["sensors"]["waterLevel"], 50);
    assert!(json["sensors"]["lastCleaned"].is_string());
    assert!(json["lastUpdated"].is_string());
    assert!(json["coordinates"]["lat"].is_number());
    assert!(json["alerts"].as_array().unwrap().is_empty());

    // Test deserialization from JSON
    let deserialized: Facility = serde_json::from_value(json).expect("Should deserialize");
    assert_eq!(deserialized, facility);
}

/// Test FacilityError creation and formatting
#[test]
fn test_facility_error_types() {
    let not_found = FacilityError::not_found("NH42");
    assert!(format!("{}", not_found).contains("NH42"));

    let web_error = FacilityError::web_server_error("Server startup failed");
    assert!(format!("{}", web_error).contains("Server startup failed"));

    let config_error = FacilityError::config_error("Invalid configuration");
    assert!(format!("{}", config_error).contains("Invalid configuration"));

    let io_error: FacilityError =
        std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
    assert!(format!("{}", io_error).contains("port taken"));
}

/// Test WebConfig builder pattern
#[test]
fn test_web_config() {
    let config = WebConfig::default()
        .with_host("127.0.0.1")
        .with_port(9090)
        .with_cors(false)
        .with_facility_count(5)
        .with_seed(Some(11))
        .with_analysis_delay_ms(250);

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9090);
    assert!(!config.enable_cors);
    assert_eq!(config.facility_count, 5);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.analysis_delay(), Duration::from_millis(250));
    assert_eq!(config.bind_address(), "127.0.0.1:9090");
}

/// Test the defaults reproduce the fixed behavior of the service
#[test]
fn test_default_config() {
    let config = WebConfig::default();

    assert_eq!(config.port, DEFAULT_WEB_PORT);
    assert_eq!(config.port, 3000);
    assert!(config.enable_cors);
    assert_eq!(config.facility_count, DEFAULT_FACILITY_COUNT);
    assert_eq!(config.facility_count, 20);
    assert_eq!(config.analysis_delay_ms, DEFAULT_ANALYSIS_DELAY_MS);
    assert!(config.seed.is_none());
    assert_eq!(config.facts, StaticFacts::default());
}

/// Test custom static facts survive a config round trip
#[test]
fn test_config_with_custom_facts() {
    let facts = StaticFacts {
        cost_savings: CostSavings {
            monthly: "₹1".to_string(),
            annual: "₹12".to_string(),
        },
        maintenance_stats: MaintenanceStats {
            scheduled: 1,
            completed: 0,
            pending: 1,
        },
    };
    let config = WebConfig::default().with_facts(facts.clone());

    let json = serde_json::to_string(&config).expect("Should serialize config");
    let restored: WebConfig = serde_json::from_str(&json).expect("Should deserialize config");
    assert_eq!(restored.facts, facts);
}

/// Test the store bootstraps exactly the requested fleet
#[tokio::test]
async fn test_store_bootstrap() {
    let store = FacilityStore::bootstrap(FacilityGenerator::new(), DEFAULT_FACILITY_COUNT);
    let facilities = store.list().await;

    assert_eq!(facilities.len(), 20);
    for (i, facility) in facilities.iter().enumerate() {
        assert_eq!(facility.id, format!("NH{}", i + 1));
        assert_eq!(facility.name, format!("Facility {}", i + 1));
    }
}

/// Test refresh through the store leaves other records untouched
#[tokio::test]
async fn test_store_refresh_isolated() {
    let store = FacilityStore::bootstrap(FacilityGenerator::with_seed(8), 4);
    let before = store.list().await;

    tokio_test::assert_ok!(store.read_and_refresh("NH2").await);
    let after = store.list().await;

    assert_eq!(before[0], after[0]);
    assert_eq!(before[2], after[2]);
    assert_eq!(before[3], after[3]);
    assert_eq!(before[1].sensors.air_quality, after[1].sensors.air_quality);

    tokio_test::assert_err!(store.read_and_refresh("nh2").await);
}

/// Test analytics via the store on a scripted fleet
#[tokio::test]
async fn test_store_analytics() {
    let generator = FacilityGenerator::with_source(CycleRandom::constant(0.0));
    let store = FacilityStore::bootstrap(generator, 4);
    let analytics = store.analytics(&StaticFacts::default()).await;

    assert_eq!(analytics.total_facilities, 4);
    assert_eq!(analytics.active_facilities, 0);
    assert_eq!(analytics.average_rating, "3.0");
    assert_eq!(analytics.total_daily_users, 400);
    assert_eq!(analytics.alert_count, 0);
}

/// Test status helpers
#[test]
fn test_status_helpers() {
    let mut generator = FacilityGenerator::with_source(CycleRandom::constant(0.9));
    let mut facility = generator.generate(1);
    assert!(facility.is_active());
    assert_eq!(facility.alerts.len(), 2);

    facility.status = FacilityStatus::Maintenance;
    assert!(!facility.is_active());
}
