use super::*;

#[test]
fn tent_size_accepts_only_selector_values() {
    for places in [0, 1, 2, 3, 4, 5, 6, 8] {
        assert_eq!(TentSize::new(places).map(TentSize::places), Ok(u8::try_from(places).unwrap()));
    }
    for places in [-1, 7, 9, 10, 255] {
        assert_eq!(TentSize::new(places), Err(ParseError::Size(places)));
    }
}

#[test]
fn tent_size_default_is_six() {
    assert_eq!(TentSize::default().places(), 6);
}

#[test]
fn tent_size_all_is_ascending_and_skips_seven() {
    let all: Vec<u8> = TentSize::all().map(TentSize::places).collect();
    assert_eq!(all, vec![0, 1, 2, 3, 4, 5, 6, 8]);
}

#[test]
fn tent_size_labels() {
    assert_eq!(TentSize::new(0).unwrap().label(), "N'accueille pas de personne");
    assert_eq!(TentSize::new(1).unwrap().label(), "1 place");
    assert_eq!(TentSize::new(8).unwrap().label(), "8 places");
}

#[test]
fn tent_size_rejects_out_of_set_json() {
    assert!(serde_json::from_str::<TentSize>("7").is_err());
    assert_eq!(serde_json::from_str::<TentSize>("4").unwrap().places(), 4);
    assert_eq!(serde_json::to_string(&TentSize::new(5).unwrap()).unwrap(), "5");
}

#[test]
fn enums_serialize_as_uppercase_codes() {
    assert_eq!(serde_json::to_string(&TentState::Neuf).unwrap(), "\"NEUF\"");
    assert_eq!(serde_json::to_string(&TentType::Canadienne).unwrap(), "\"CANADIENNE\"");
    assert_eq!(serde_json::to_string(&Unit::LouveteauxJeannettes).unwrap(), "\"LOUVETEAUX_JEANNETTES\"");
    assert_eq!(serde_json::to_string(&Movement::Sgdf).unwrap(), "\"SGDF\"");
}

#[test]
fn as_str_matches_serde_code_for_every_unit() {
    for unit in Unit::ALL {
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, format!("\"{}\"", unit.as_str()));
        assert_eq!(unit.as_str().parse::<Unit>(), Ok(unit));
    }
}

#[test]
fn from_str_rejects_unknown_codes() {
    assert_eq!("NEW".parse::<TentState>(), Err(ParseError::State("NEW".to_owned())));
    assert_eq!("IGLOO".parse::<TentType>(), Err(ParseError::Type("IGLOO".to_owned())));
    assert_eq!("XYZ".parse::<Movement>(), Err(ParseError::Movement("XYZ".to_owned())));
    assert_eq!("groupe".parse::<Unit>(), Err(ParseError::Unit("groupe".to_owned())));
}

#[test]
fn defaults_match_new_tent_form() {
    assert_eq!(TentState::default(), TentState::Neuf);
    assert_eq!(TentType::default(), TentType::Canadienne);
    assert_eq!(Unit::default(), Unit::Groupe);
}

#[test]
fn every_movement_starts_with_group_level_unit() {
    for movement in Movement::ALL {
        assert_eq!(movement.units().first(), Some(&Unit::Groupe));
        assert!(movement.has_unit(Unit::Groupe));
    }
}

#[test]
fn movement_units_are_movement_specific() {
    assert!(Movement::Sgdf.has_unit(Unit::Farfadets));
    assert!(!Movement::Suf.has_unit(Unit::Farfadets));
    assert!(Movement::Eedf.has_unit(Unit::Lutins));
    assert!(!Movement::Sgdf.has_unit(Unit::Lutins));
    assert!(Movement::Suf.has_unit(Unit::Louveteaux));
    assert!(Movement::Eedf.has_unit(Unit::Louveteaux));
}

#[test]
fn create_request_defaults_comments_when_missing() {
    let body = r#"{"identifying_string":"A1","state":"BON","size":3,"unit":"GROUPE","complete":true,"integrated":false,"tent_type":"QUECHUA"}"#;
    let req: CreateTentRequest = serde_json::from_str(body).unwrap();
    assert_eq!(req.identifying_string, "A1");
    assert_eq!(req.state, TentState::Bon);
    assert_eq!(req.size.places(), 3);
    assert_eq!(req.tent_type, TentType::Quechua);
    assert!(req.comments.is_empty());
}

#[test]
fn create_request_with_bad_size_fails_to_parse() {
    let body = r#"{"identifying_string":"A1","state":"BON","size":7,"unit":"GROUPE","complete":true,"integrated":false,"tent_type":"QUECHUA"}"#;
    assert!(serde_json::from_str::<CreateTentRequest>(body).is_err());
}

#[test]
fn api_error_body_shape() {
    let json = serde_json::to_value(ApiError::new("nope")).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "nope" }));
}
