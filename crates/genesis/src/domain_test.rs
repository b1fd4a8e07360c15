use crate::domain::Domain;
use crate::error::Error;

#[test]
fn test_labels_parse_back() {
    for domain in Domain::ALL {
        assert_eq!(domain.label().parse::<Domain>().unwrap(), domain);
        assert_eq!(domain.to_string(), domain.label());
    }
}

#[test]
fn test_unknown_name_is_rejected() {
    let err = "atmospherics".parse::<Domain>().unwrap_err();
    assert!(matches!(err, Error::UnknownDomain { ref name } if name == "atmospherics"));
    assert!(err.to_string().contains("atmospherics"));
}

#[test]
fn test_parse_is_case_sensitive() {
    assert!("Cosmic".parse::<Domain>().is_err());
    assert!("".parse::<Domain>().is_err());
}

#[test]
fn test_index_matches_all_order() {
    for (i, domain) in Domain::ALL.into_iter().enumerate() {
        assert_eq!(domain.index(), i);
    }
}

#[test]
fn test_dependencies_point_to_earlier_domains() {
    // ALL is ordered leaves first, so every edge must point backwards
    for domain in Domain::ALL {
        for dep in domain.dependencies() {
            assert!(dep.index() < domain.index(), "{domain} -> {dep}");
        }
    }
}

#[test]
fn test_declared_edges() {
    assert!(Domain::Cosmic.dependencies().is_empty());
    assert!(Domain::Stellar.dependencies().is_empty());
    assert!(Domain::Planetary.dependencies().is_empty());
    assert_eq!(
        Domain::Chemistry.dependencies(),
        &[Domain::Stellar, Domain::Planetary, Domain::Atmospheric]
    );
    assert_eq!(Domain::Derived.dependencies().len(), 4);
}

#[test]
fn test_serde_uses_lowercase_labels() {
    let json = serde_json::to_string(&Domain::Atmospheric).unwrap();
    assert_eq!(json, "\"atmospheric\"");
}
