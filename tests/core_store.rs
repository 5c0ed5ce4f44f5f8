use chrono::{Duration, NaiveDate, NaiveDateTime};

use scoreboard::{MatchRegistry, MatchStore, RegistryError, fixture::MatchDraft};

fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 7, 15)
        .and_then(|d| d.and_hms_opt(19, 30, 40))
        .unwrap()
}

fn draft(home: &str, away: &str, start_time: NaiveDateTime) -> MatchDraft {
    MatchDraft {
        home_country: home.to_string(),
        away_country: away.to_string(),
        start_time,
    }
}

fn running_ids(registry: &MatchRegistry) -> Vec<u64> {
    registry.list_running_sorted().iter().map(|m| m.id).collect()
}

#[test]
fn start_yields_monotonic_ids() {
    let mut store = MatchStore::new();
    let id1 = store.start(draft("Mexico", "Canada", t0())).unwrap();
    let id2 = store.start(draft("Spain", "Brazil", t0())).unwrap();
    let id3 = store.start(draft("Uruguay", "Italy", t0())).unwrap();

    assert_eq!((id1, id2, id3), (1, 2, 3));

    let m = store.get(id1).unwrap();
    assert_eq!((m.home.value, m.away.value), (0, 0));
    assert!(!m.finished);
}

#[test]
fn default_store_numbers_like_new() {
    let mut store = MatchStore::default();

    assert_eq!(store.start(draft("Mexico", "Canada", t0())), Ok(1));
    assert_eq!(store.start(draft("Spain", "Brazil", t0())), Ok(2));
}

#[test]
fn ids_are_not_reused_after_finish() {
    let mut store = MatchStore::new();
    let id1 = store.start(draft("Mexico", "Canada", t0())).unwrap();
    store.finish(id1).unwrap();
    let id2 = store.start(draft("Mexico", "Canada", t0())).unwrap();

    assert_eq!(id2, id1 + 1);
    assert_eq!(store.ids(), vec![id1, id2]);
}

#[test]
fn higher_total_score_sorts_first() {
    let registry = MatchRegistry::with_iso_countries();
    let mex_can = registry.start_match("MEX", "CAN", t0()).unwrap();
    let esp_fra = registry.start_match("ESP", "FRA", t0()).unwrap();
    registry.update_score(mex_can, 1, 7).unwrap();

    let running = registry.list_running_sorted();
    assert_eq!(running.len(), 2);
    assert_eq!(running[0].id, mex_can);
    assert_eq!((running[0].home.value, running[0].away.value), (1, 7));
    assert_eq!(running[1].id, esp_fra);
    assert_eq!(running[1].total_score(), 0);
}

#[test]
fn equal_totals_put_most_recent_start_first() {
    let registry = MatchRegistry::with_iso_countries();
    let esp_bra = registry
        .start_match("ESP", "BRA", t0() + Duration::minutes(5))
        .unwrap();
    let ury_ita = registry
        .start_match("URY", "ITA", t0() + Duration::minutes(15))
        .unwrap();
    registry.update_score(esp_bra, 6, 6).unwrap();
    registry.update_score(ury_ita, 10, 2).unwrap();

    assert_eq!(running_ids(&registry), vec![ury_ita, esp_bra]);
    assert_eq!(registry.summary(), vec!["Uruguay 10 - Italy 2", "Spain 6 - Brazil 6"]);
}

#[test]
fn identical_total_and_start_break_ties_by_id() {
    let registry = MatchRegistry::with_iso_countries();
    let first = registry.start_match("ESP", "MEX", t0()).unwrap();
    let second = registry.start_match("URY", "ITA", t0()).unwrap();

    assert_eq!(running_ids(&registry), vec![first, second]);
}

#[test]
fn country_already_playing_is_rejected_on_either_side() {
    for (prior_home, prior_away) in [("MEX", "ESP"), ("ESP", "MEX")] {
        for (next_home, next_away) in [("MEX", "DEU"), ("DEU", "MEX")] {
            let registry = MatchRegistry::with_iso_countries();
            registry.start_match(prior_home, prior_away, t0()).unwrap();

            assert_eq!(
                registry.start_match(next_home, next_away, t0()),
                Err(RegistryError::TeamAlreadyPlaying("Mexico".into()))
            );
            assert_eq!(registry.len(), 1);
            assert!(!registry.is_playing("Germany"));
        }
    }
}

#[test]
fn home_team_is_reported_when_both_sides_are_busy() {
    let registry = MatchRegistry::with_iso_countries();
    registry.start_match("MEX", "CAN", t0()).unwrap();

    assert_eq!(
        registry.start_match("CAN", "MEX", t0()),
        Err(RegistryError::TeamAlreadyPlaying("Canada".into()))
    );
}

#[test]
fn country_cannot_play_itself() {
    let registry = MatchRegistry::with_iso_countries();

    assert_eq!(
        registry.start_match("MEX", "mex", t0()),
        Err(RegistryError::TeamAlreadyPlaying("Mexico".into()))
    );
    assert!(registry.is_empty());
}

#[test]
fn unknown_code_creates_nothing() {
    let registry = MatchRegistry::with_iso_countries();

    assert_eq!(
        registry.start_match("XXX", "CAN", t0()),
        Err(RegistryError::CountryNotSupported("XXX".into()))
    );
    assert_eq!(
        registry.start_match("CAN", "FAKE_ISO_CODE", t0()),
        Err(RegistryError::CountryNotSupported("FAKE_ISO_CODE".into()))
    );
    assert!(registry.is_empty());
    assert!(!registry.is_playing("Canada"));

    let id = registry.start_match("CAN", "MEX", t0()).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn first_unknown_code_is_reported() {
    let registry = MatchRegistry::with_iso_countries();

    assert_eq!(
        registry.start_match("AAA", "BBB", t0()),
        Err(RegistryError::CountryNotSupported("AAA".into()))
    );
}

#[test]
fn negative_scores_are_rejected_before_lookup() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("DEU", "ESP", t0()).unwrap();

    for (home, away) in [(0, -1), (-2, 5)] {
        assert_eq!(
            registry.update_score(id, home, away),
            Err(RegistryError::ScoreNotPositive { home, away })
        );
    }
    assert_eq!(
        registry.update_score(9999, -1, 0),
        Err(RegistryError::ScoreNotPositive { home: -1, away: 0 })
    );

    let m = registry.get_match(id).unwrap();
    assert_eq!((m.home.value, m.away.value), (0, 0));
}

#[test]
fn unknown_ids_are_not_found() {
    let registry = MatchRegistry::with_iso_countries();

    assert_eq!(registry.update_score(9999, 1, 1), Err(RegistryError::MatchNotFound(9999)));
    assert_eq!(registry.finish_match(1), Err(RegistryError::MatchNotFound(1)));
    assert_eq!(registry.get_match(1), Err(RegistryError::MatchNotFound(1)));
}

#[test]
fn update_is_idempotent() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("MEX", "CAN", t0()).unwrap();

    registry.update_score(id, 3, 2).unwrap();
    let once = registry.get_match(id).unwrap();
    let listed_once = registry.list_running_sorted();

    registry.update_score(id, 3, 2).unwrap();
    assert_eq!(registry.get_match(id).unwrap(), once);
    assert_eq!(registry.list_running_sorted(), listed_once);
}

#[test]
fn update_may_lower_scores() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("MEX", "CAN", t0()).unwrap();
    registry.update_score(id, 4, 4).unwrap();
    registry.update_score(id, 1, 0).unwrap();

    assert_eq!(registry.get_match(id).unwrap().total_score(), 1);
}

#[test]
fn finish_removes_from_listing_but_not_lookup() {
    let registry = MatchRegistry::with_iso_countries();
    let kept = registry.start_match("ESP", "MEX", t0()).unwrap();
    let done = registry.start_match("URY", "ITA", t0()).unwrap();
    registry.update_score(done, 2, 1).unwrap();
    registry.finish_match(done).unwrap();

    assert_eq!(running_ids(&registry), vec![kept]);
    assert_eq!(registry.running_count(), 1);
    assert_eq!(registry.len(), 2);

    let m = registry.get_match(done).unwrap();
    assert!(m.finished);
    assert_eq!((m.home.value, m.away.value), (2, 1));
}

#[test]
fn finished_match_rejects_update_and_second_finish() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("MEX", "CAN", t0()).unwrap();
    registry.finish_match(id).unwrap();

    assert_eq!(registry.update_score(id, 1, 1), Err(RegistryError::MatchNotFound(id)));
    assert_eq!(registry.finish_match(id), Err(RegistryError::MatchNotFound(id)));

    let m = registry.get_match(id).unwrap();
    assert!(m.finished);
    assert_eq!(m.total_score(), 0);
}

#[test]
fn finishing_frees_both_countries() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("MEX", "CAN", t0()).unwrap();
    assert!(registry.is_playing("Mexico"));
    assert!(registry.is_playing("Canada"));

    registry.finish_match(id).unwrap();
    assert!(!registry.is_playing("Mexico"));
    assert!(!registry.is_playing("Canada"));

    let rematch = registry.start_match("CAN", "MEX", t0()).unwrap();
    assert_ne!(rematch, id);
}

#[test]
fn listing_is_a_snapshot() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("MEX", "CAN", t0()).unwrap();
    let before = registry.list_running_sorted();

    registry.update_score(id, 5, 5).unwrap();
    registry.start_match("ESP", "FRA", t0()).unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(before[0].total_score(), 0);
}

#[test]
fn matches_serialize_for_embedders() {
    let registry = MatchRegistry::with_iso_countries();
    let id = registry.start_match("MEX", "CAN", t0()).unwrap();
    registry.update_score(id, 1, 7).unwrap();

    let json = serde_json::to_value(registry.list_running_sorted()).unwrap();
    assert_eq!(json[0]["id"], 1);
    assert_eq!(json[0]["home"]["country"], "Mexico");
    assert_eq!(json[0]["away"]["value"], 7);
    assert_eq!(json[0]["finished"], false);
}
