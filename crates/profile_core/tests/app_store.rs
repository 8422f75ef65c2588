use profile_core::{
    AppState, AppStore, EntryForm, Gender, MaritalStatus, ProfilePatch, Qualification,
    StoreError, MAX_ENTRIES, SERVICE_A_ID, SERVICE_C_ID,
};
use uuid::Uuid;

#[test]
fn reset_restores_initial_state_after_any_history() {
    let store = AppStore::new();

    let mut form = EntryForm::qualifications(store.max_entries());
    form.set_field("qualificationName", "普通自動車第一種運転免許")
        .unwrap();
    form.set_field("acquisitionDate", "2016-08").unwrap();
    let qualifications = form.add(&store.get_state().profile.qualifications).unwrap();

    store
        .update_profile(ProfilePatch {
            name: Some("山田 太郎".to_string()),
            gender: Some(Gender::Other),
            marital_status: Some(MaritalStatus::Married),
            dependents: Some("2".to_string()),
            qualifications: Some(qualifications),
            ..ProfilePatch::default()
        })
        .unwrap();
    store.toggle_service(SERVICE_A_ID);
    store.toggle_service(SERVICE_C_ID);
    assert_ne!(*store.get_state(), AppState::initial());

    store.reset_all();
    assert_eq!(*store.get_state(), AppState::initial());
}

#[test]
fn toggle_twice_restores_flag() {
    let store = AppStore::new();
    for service in &store.get_state().services {
        let before = service.connected;
        assert!(store.toggle_service(&service.id));
        assert_eq!(
            store.get_state().service(&service.id).unwrap().connected,
            !before
        );
        assert!(store.toggle_service(&service.id));
        assert_eq!(
            store.get_state().service(&service.id).unwrap().connected,
            before
        );
    }
}

#[test]
fn service_set_is_fixed() {
    let store = AppStore::new();
    store.toggle_service(SERVICE_A_ID);
    store.toggle_service("service-unknown");
    store.reset_all();
    store.toggle_service(SERVICE_C_ID);

    let ids: Vec<_> = store
        .get_state()
        .services
        .iter()
        .map(|service| service.id.clone())
        .collect();
    assert_eq!(ids, vec!["service-a", "service-b", "service-c"]);
}

#[test]
fn update_profile_merges_shallowly() {
    let store = AppStore::new();
    store
        .update_profile(ProfilePatch {
            name: Some("山田 太郎".to_string()),
            phone: Some("090-1234-5678".to_string()),
            ..ProfilePatch::default()
        })
        .unwrap();
    store
        .update_profile(ProfilePatch {
            phone: Some(String::new()),
            email: Some("taro@example.com".to_string()),
            ..ProfilePatch::default()
        })
        .unwrap();

    let profile = &store.get_state().profile;
    assert_eq!(profile.name, "山田 太郎");
    assert_eq!(profile.phone, "");
    assert_eq!(profile.email, "taro@example.com");
}

#[test]
fn update_profile_rejects_repeated_entry_id() {
    let store = AppStore::new();
    let mut qualification = Qualification::blank(Uuid::new_v4());
    qualification.qualification_name = "簿記2級".to_string();
    qualification.acquisition_date = "2020-06".to_string();

    let err = store
        .update_profile(ProfilePatch {
            qualifications: Some(vec![qualification.clone(), qualification.clone()]),
            ..ProfilePatch::default()
        })
        .unwrap_err();
    assert_eq!(err, StoreError::DuplicateId(qualification.id));
    assert_eq!(*store.get_state(), AppState::initial());
}

#[test]
fn store_cap_is_clamped_to_twenty() {
    let store = AppStore::with_max_entries(50);
    assert_eq!(store.max_entries(), MAX_ENTRIES);

    let qualifications: Vec<Qualification> = (0..30)
        .map(|_| Qualification::blank(Uuid::new_v4()))
        .collect();
    let err = store
        .update_profile(ProfilePatch {
            qualifications: Some(qualifications),
            ..ProfilePatch::default()
        })
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::CollectionOverCapacity {
            len: 30,
            max_entries: MAX_ENTRIES
        }
    );
    assert!(store.get_state().profile.qualifications.is_empty());
}
