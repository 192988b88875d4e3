use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::config;
use crate::store::defaults;
use crate::store::model::{
    AboutInfo, AboutPatch, CaseStudy, CaseStudyPatch, FooterInfo, FooterPatch, NewCaseStudy,
    NewPartner, NewService, Partner, PartnerPatch, Record, Service, ServicePatch,
};
use crate::store::storage::{KeyValueStorage, StorageError};

/// The six values the store keeps, each persisted under its own key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Footer,
    About,
    Services,
    Partners,
    CaseStudies,
    IsAdmin,
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Footer,
        Slot::About,
        Slot::Services,
        Slot::Partners,
        Slot::CaseStudies,
        Slot::IsAdmin,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Slot::Footer => "footerData",
            Slot::About => "aboutData",
            Slot::Services => "services",
            Slot::Partners => "partners",
            Slot::CaseStudies => "caseStudies",
            Slot::IsAdmin => "isAdmin",
        }
    }
}

fn timestamp_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

fn read_slot<T: DeserializeOwned>(storage: &impl KeyValueStorage, slot: Slot) -> Option<T> {
    let raw = match storage.get_item(slot.key()) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("Could not read {} from storage, using default: {}", slot.key(), e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Stored {} is malformed, using default: {}", slot.key(), e);
            None
        }
    }
}

fn update_by_id<R>(records: &mut [R], id: &str, patch: R::Patch) -> bool
where
    R: Record,
    R::Patch: Clone,
{
    let mut found = false;
    for record in records.iter_mut().filter(|r| r.id() == id) {
        record.apply(patch.clone());
        found = true;
    }
    found
}

fn remove_by_id<R: Record>(records: &mut Vec<R>, id: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}

/// Editable site content plus the admin flag, mirrored write-through into
/// a [`KeyValueStorage`].
///
/// Every mutation that changes a slot writes that slot before returning.
/// Storage failures never reach the caller: loads fall back to the seed
/// values and failed writes are logged.
pub struct ContentStore<S> {
    storage: S,
    footer: FooterInfo,
    about: AboutInfo,
    services: Vec<Service>,
    partners: Vec<Partner>,
    case_studies: Vec<CaseStudy>,
    is_admin: bool,
    admin_password: String,
    next_id: Box<dyn FnMut() -> String>,
}

impl<S: KeyValueStorage> ContentStore<S> {
    pub fn load(storage: S) -> Self {
        Self::load_with_password(storage, config::admin_password())
    }

    pub fn load_with_password(storage: S, admin_password: impl Into<String>) -> Self {
        let footer = read_slot(&storage, Slot::Footer).unwrap_or_else(defaults::footer);
        let about = read_slot(&storage, Slot::About).unwrap_or_else(defaults::about);
        let services = read_slot(&storage, Slot::Services).unwrap_or_else(defaults::services);
        let partners = read_slot(&storage, Slot::Partners).unwrap_or_else(defaults::partners);
        let case_studies =
            read_slot(&storage, Slot::CaseStudies).unwrap_or_else(defaults::case_studies);
        let is_admin = read_slot(&storage, Slot::IsAdmin).unwrap_or(false);

        debug!(
            "Content loaded: {} services, {} partners, {} case studies",
            services.len(),
            partners.len(),
            case_studies.len()
        );

        Self {
            storage,
            footer,
            about,
            services,
            partners,
            case_studies,
            is_admin,
            admin_password: admin_password.into(),
            next_id: Box::new(timestamp_id),
        }
    }

    /// Replace the id generator used by the `add_*` operations.
    #[cfg(test)]
    pub fn with_id_source(mut self, next_id: impl FnMut() -> String + 'static) -> Self {
        self.next_id = Box::new(next_id);
        self
    }

    pub fn footer(&self) -> &FooterInfo {
        &self.footer
    }

    pub fn about(&self) -> &AboutInfo {
        &self.about
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn partners(&self) -> &[Partner] {
        &self.partners
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn partner(&self, id: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }

    pub fn case_study(&self, id: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|c| c.id == id)
    }

    /// The partner a case study points at. `None` both when the case study
    /// has no partner and when the partner has since been removed.
    pub fn partner_for(&self, case_study: &CaseStudy) -> Option<&Partner> {
        case_study.partner_id.as_deref().and_then(|id| self.partner(id))
    }

    pub fn case_studies_for_partner<'a>(
        &'a self,
        partner_id: &'a str,
    ) -> impl Iterator<Item = &'a CaseStudy> + 'a {
        self.case_studies
            .iter()
            .filter(move |c| c.partner_id.as_deref() == Some(partner_id))
    }

    pub fn update_footer(&mut self, patch: FooterPatch) {
        self.footer.apply(patch);
        self.persist(Slot::Footer);
    }

    pub fn update_about(&mut self, patch: AboutPatch) {
        self.about.apply(patch);
        self.persist(Slot::About);
    }

    pub fn add_service(&mut self, new: NewService) -> Service {
        let service = new.into_service((self.next_id)());
        self.services.push(service.clone());
        self.persist(Slot::Services);
        service
    }

    /// Returns whether a service with `id` existed.
    pub fn update_service(&mut self, id: &str, patch: ServicePatch) -> bool {
        let found = update_by_id(&mut self.services, id, patch);
        if found {
            self.persist(Slot::Services);
        }
        found
    }

    pub fn remove_service(&mut self, id: &str) -> bool {
        let found = remove_by_id(&mut self.services, id);
        if found {
            self.persist(Slot::Services);
        }
        found
    }

    pub fn add_partner(&mut self, new: NewPartner) -> Partner {
        let partner = new.into_partner((self.next_id)());
        self.partners.push(partner.clone());
        self.persist(Slot::Partners);
        partner
    }

    pub fn update_partner(&mut self, id: &str, patch: PartnerPatch) -> bool {
        let found = update_by_id(&mut self.partners, id, patch);
        if found {
            self.persist(Slot::Partners);
        }
        found
    }

    /// Case studies that reference the partner keep their `partner_id`.
    pub fn remove_partner(&mut self, id: &str) -> bool {
        let found = remove_by_id(&mut self.partners, id);
        if found {
            self.persist(Slot::Partners);
        }
        found
    }

    pub fn add_case_study(&mut self, new: NewCaseStudy) -> CaseStudy {
        let case_study = new.into_case_study((self.next_id)());
        self.case_studies.push(case_study.clone());
        self.persist(Slot::CaseStudies);
        case_study
    }

    pub fn update_case_study(&mut self, id: &str, patch: CaseStudyPatch) -> bool {
        let found = update_by_id(&mut self.case_studies, id, patch);
        if found {
            self.persist(Slot::CaseStudies);
        }
        found
    }

    pub fn remove_case_study(&mut self, id: &str) -> bool {
        let found = remove_by_id(&mut self.case_studies, id);
        if found {
            self.persist(Slot::CaseStudies);
        }
        found
    }

    /// Plain equality check against the configured password. A wrong
    /// password leaves the current flag as it was.
    pub fn login(&mut self, password: &str) -> bool {
        if password == self.admin_password {
            info!("Admin login succeeded");
            self.is_admin = true;
            self.persist(Slot::IsAdmin);
            true
        } else {
            info!("Admin login rejected");
            false
        }
    }

    pub fn logout(&mut self) {
        self.is_admin = false;
        self.persist(Slot::IsAdmin);
    }

    /// Put every content slot back to its seed value. The admin flag is kept.
    pub fn reset_to_defaults(&mut self) {
        self.footer = defaults::footer();
        self.about = defaults::about();
        self.services = defaults::services();
        self.partners = defaults::partners();
        self.case_studies = defaults::case_studies();
        for slot in Slot::ALL.into_iter().filter(|s| *s != Slot::IsAdmin) {
            self.persist(slot);
        }
    }

    /// Write all six slots, reporting the first failure.
    pub fn flush(&self) -> Result<(), StorageError> {
        for slot in Slot::ALL {
            self.write_slot(slot)?;
        }
        Ok(())
    }

    fn persist(&self, slot: Slot) {
        match self.write_slot(slot) {
            Ok(()) => debug!("Saved {}", slot.key()),
            Err(e) => warn!("Failed to save {}: {}", slot.key(), e),
        }
    }

    fn write_slot(&self, slot: Slot) -> Result<(), StorageError> {
        let json = match slot {
            Slot::Footer => serde_json::to_string(&self.footer)?,
            Slot::About => serde_json::to_string(&self.about)?,
            Slot::Services => serde_json::to_string(&self.services)?,
            Slot::Partners => serde_json::to_string(&self.partners)?,
            Slot::CaseStudies => serde_json::to_string(&self.case_studies)?,
            Slot::IsAdmin => serde_json::to_string(&self.is_admin)?,
        };
        self.storage.set_item(slot.key(), &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::{ServiceIcon, SocialLink};
    use crate::store::storage::MemoryStorage;
    use proptest::prelude::*;

    const PASSWORD: &str = "letmein";

    fn counting_ids() -> impl FnMut() -> String {
        let mut next = 1000;
        move || {
            next += 1;
            next.to_string()
        }
    }

    fn fresh_store() -> (ContentStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::default();
        let store = ContentStore::load_with_password(storage.clone(), PASSWORD)
            .with_id_source(counting_ids());
        (store, storage)
    }

    fn new_service(title: &str) -> NewService {
        NewService {
            title: title.to_string(),
            description: "Y".to_string(),
            icon: ServiceIcon::Code,
            details: "Z".to_string(),
        }
    }

    fn new_case_study(partner_id: Option<&str>) -> NewCaseStudy {
        NewCaseStudy {
            title: "Warehouse rollout".to_string(),
            client: "Acme".to_string(),
            description: "d".to_string(),
            challenge: "c".to_string(),
            solution: "s".to_string(),
            result: "r".to_string(),
            images: vec!["/assets/a.jpg".to_string()],
            partner_id: partner_id.map(str::to_string),
        }
    }

    #[test]
    fn empty_storage_loads_seed_values() {
        let (store, storage) = fresh_store();
        assert_eq!(store.footer(), &defaults::footer());
        assert_eq!(store.about(), &defaults::about());
        assert_eq!(store.services(), defaults::services().as_slice());
        assert_eq!(store.partners(), defaults::partners().as_slice());
        assert_eq!(store.case_studies(), defaults::case_studies().as_slice());
        assert!(!store.is_admin());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn stored_values_take_precedence_over_seed() {
        let storage = MemoryStorage::default();
        storage.put_raw("services", "[]");
        storage.put_raw("isAdmin", "true");
        let store = ContentStore::load_with_password(storage, PASSWORD);
        assert!(store.services().is_empty());
        assert!(store.is_admin());
        assert_eq!(store.partners().len(), defaults::partners().len());
    }

    #[test]
    fn malformed_stored_slot_falls_back_to_seed() {
        let storage = MemoryStorage::default();
        storage.put_raw("partners", "{not json");
        storage.put_raw("footerData", r#"{"address": 5}"#);
        let store = ContentStore::load_with_password(storage, PASSWORD);
        assert_eq!(store.partners(), defaults::partners().as_slice());
        assert_eq!(store.footer(), &defaults::footer());
    }

    #[test]
    fn footer_update_merges_given_fields_only() {
        let (mut store, storage) = fresh_store();
        store.update_footer(FooterPatch {
            phone: Some("+358 9 000".to_string()),
            ..Default::default()
        });
        let footer = store.footer();
        assert_eq!(footer.phone, "+358 9 000");
        assert_eq!(footer.email, defaults::footer().email);
        assert_eq!(footer.social_links, defaults::footer().social_links);
        assert_eq!(storage.writes(), 1);

        let saved: FooterInfo = serde_json::from_str(&storage.raw("footerData").unwrap()).unwrap();
        assert_eq!(&saved, footer);
    }

    #[test]
    fn adding_and_removing_a_service_restores_the_count() {
        let (mut store, _) = fresh_store();
        let default_count = store.services().len();

        let created = store.add_service(new_service("X"));
        assert_eq!(store.services().len(), default_count + 1);
        assert_eq!(store.services().last().unwrap().title, "X");
        assert_eq!(store.services().last().unwrap().id, created.id);

        assert!(store.remove_service(&created.id));
        assert_eq!(store.services().len(), default_count);
        assert!(!store.remove_service(&created.id));
        assert_eq!(store.services().len(), default_count);
    }

    #[test]
    fn update_touches_only_the_matching_record() {
        let (mut store, _) = fresh_store();
        let before = store.services().to_vec();
        let target = before[1].id.clone();

        assert!(store.update_service(
            &target,
            ServicePatch { title: Some("Renamed".to_string()), ..Default::default() },
        ));

        for (old, new) in before.iter().zip(store.services()) {
            if old.id == target {
                assert_eq!(new.title, "Renamed");
                assert_eq!(new.details, old.details);
                assert_eq!(new.icon, old.icon);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn partner_update_merges_into_the_matching_partner_only() {
        let (mut store, storage) = fresh_store();
        let before = store.partners().to_vec();
        let target = before[0].clone();

        assert!(store.update_partner(
            &target.id,
            PartnerPatch { description: Some("Logistics software".into()), ..Default::default() },
        ));
        assert_eq!(storage.writes(), 1);

        let updated = store.partner(&target.id).unwrap();
        assert_eq!(updated, &Partner { description: "Logistics software".into(), ..target.clone() });
        for (old, new) in before.iter().zip(store.partners()) {
            if old.id != target.id {
                assert_eq!(old, new);
            }
        }
        assert_eq!(store.partners().len(), before.len());
    }

    #[test]
    fn case_study_update_can_clear_its_partner() {
        let (mut store, storage) = fresh_store();
        let before = store.case_studies().to_vec();
        let target = before
            .iter()
            .find(|c| c.partner_id.is_some())
            .cloned()
            .unwrap();

        assert!(store.update_case_study(
            &target.id,
            CaseStudyPatch {
                result: Some("Lead time halved".into()),
                partner_id: Some(None),
                ..Default::default()
            },
        ));
        assert_eq!(storage.writes(), 1);

        let expected = CaseStudy {
            result: "Lead time halved".into(),
            partner_id: None,
            ..target.clone()
        };
        assert_eq!(store.case_study(&target.id), Some(&expected));
        for (old, new) in before.iter().zip(store.case_studies()) {
            if old.id != target.id {
                assert_eq!(old, new);
            }
        }

        let reloaded = ContentStore::load_with_password(storage, PASSWORD);
        assert_eq!(reloaded.case_study(&target.id), Some(&expected));
        assert!(reloaded.partner_for(&expected).is_none());
    }

    #[test]
    fn case_study_patch_overwrites_every_given_field() {
        let (mut store, _) = fresh_store();
        let created = store.add_case_study(new_case_study(None));
        let replacement = NewCaseStudy {
            title: "T2".into(),
            client: "C2".into(),
            description: "D2".into(),
            challenge: "CH2".into(),
            solution: "S2".into(),
            result: "R2".into(),
            images: vec![],
            partner_id: Some("2".into()),
        };

        assert!(store.update_case_study(&created.id, replacement.clone().into()));

        assert_eq!(
            store.case_study(&created.id),
            Some(&replacement.into_case_study(created.id.clone()))
        );
    }

    #[test]
    fn missing_ids_leave_collections_and_storage_untouched() {
        let (mut store, storage) = fresh_store();
        let partners = store.partners().to_vec();
        let studies = store.case_studies().to_vec();

        assert!(!store.update_partner("nope", PartnerPatch { name: Some("x".into()), ..Default::default() }));
        assert!(!store.remove_partner("nope"));
        assert!(!store.update_case_study("nope", CaseStudyPatch::default()));
        assert!(!store.remove_case_study("nope"));

        assert_eq!(store.partners(), partners.as_slice());
        assert_eq!(store.case_studies(), studies.as_slice());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn removing_a_partner_leaves_case_study_reference_dangling() {
        let (mut store, _) = fresh_store();
        let study = store.add_case_study(new_case_study(Some("1")));
        assert_eq!(store.partner_for(&study).map(|p| p.id.as_str()), Some("1"));

        assert!(store.remove_partner("1"));

        let kept = store.case_study(&study.id).unwrap();
        assert_eq!(kept.partner_id.as_deref(), Some("1"));
        assert!(store.partner("1").is_none());
        assert!(store.partner_for(kept).is_none());
        assert_eq!(store.case_studies_for_partner("1").count(), 2);
    }

    #[test]
    fn add_does_not_check_for_id_collisions() {
        let storage = MemoryStorage::default();
        let mut store = ContentStore::load_with_password(storage, PASSWORD)
            .with_id_source(|| "dup".to_string());
        store.add_partner(NewPartner {
            name: "A".into(),
            logo: "a.svg".into(),
            description: "a".into(),
            website: None,
        });
        store.add_partner(NewPartner {
            name: "B".into(),
            logo: "b.svg".into(),
            description: "b".into(),
            website: None,
        });
        assert_eq!(store.partners().iter().filter(|p| p.id == "dup").count(), 2);

        assert!(store.remove_partner("dup"));
        assert!(store.partner("dup").is_none());
    }

    #[test]
    fn each_mutation_writes_its_slot_once() {
        let (mut store, storage) = fresh_store();
        let a = store.add_service(new_service("A"));
        store.add_service(new_service("B"));
        store.update_service(&a.id, ServicePatch { details: Some("more".into()), ..Default::default() });
        store.remove_service(&a.id);
        store.update_about(AboutPatch { mission: Some("m".into()), ..Default::default() });
        assert_eq!(storage.writes(), 5);
    }

    #[test]
    fn login_and_logout_drive_the_admin_flag() {
        let (mut store, storage) = fresh_store();

        assert!(!store.login("wrong"));
        assert!(!store.is_admin());
        assert_eq!(storage.raw("isAdmin"), None);

        assert!(store.login(PASSWORD));
        assert!(store.is_admin());
        assert_eq!(storage.raw("isAdmin").as_deref(), Some("true"));

        assert!(!store.login("wrong again"));
        assert!(store.is_admin());

        store.logout();
        assert!(!store.is_admin());
        assert_eq!(storage.raw("isAdmin").as_deref(), Some("false"));

        store.logout();
        assert!(!store.is_admin());
    }

    #[test]
    fn default_password_comes_from_config() {
        let mut store = ContentStore::load(MemoryStorage::default());
        assert!(store.login(config::admin_password()));
    }

    #[test]
    fn admin_flag_survives_reload() {
        let (mut store, storage) = fresh_store();
        store.login(PASSWORD);
        let reloaded = ContentStore::load_with_password(storage, PASSWORD);
        assert!(reloaded.is_admin());
    }

    #[test]
    fn reload_yields_equal_content() {
        let (mut store, storage) = fresh_store();
        store.update_footer(FooterPatch {
            social_links: Some(vec![SocialLink { platform: "Mastodon".into(), url: "https://m.example".into() }]),
            ..Default::default()
        });
        store.update_about(AboutPatch { values: Some(vec!["One".into()]), ..Default::default() });
        store.add_service(new_service("Audit"));
        store.add_partner(NewPartner {
            name: "P".into(),
            logo: "p.svg".into(),
            description: "p".into(),
            website: Some("https://p.example".into()),
        });
        store.add_case_study(new_case_study(None));
        store.login(PASSWORD);
        store.flush().unwrap();

        let reloaded = ContentStore::load_with_password(storage, PASSWORD);
        assert_eq!(reloaded.footer(), store.footer());
        assert_eq!(reloaded.about(), store.about());
        assert_eq!(reloaded.services(), store.services());
        assert_eq!(reloaded.partners(), store.partners());
        assert_eq!(reloaded.case_studies(), store.case_studies());
        assert_eq!(reloaded.is_admin(), store.is_admin());
    }

    #[test]
    fn reset_restores_seed_content_but_keeps_admin() {
        let (mut store, storage) = fresh_store();
        store.login(PASSWORD);
        store.remove_service("1");
        store.update_footer(FooterPatch { email: Some("x@y.z".into()), ..Default::default() });

        store.reset_to_defaults();

        assert_eq!(store.services(), defaults::services().as_slice());
        assert_eq!(store.footer(), &defaults::footer());
        assert!(store.is_admin());
        let reloaded = ContentStore::load_with_password(storage, PASSWORD);
        assert_eq!(reloaded.services(), defaults::services().as_slice());
    }

    #[test]
    fn failed_writes_keep_in_memory_state() {
        let (mut store, storage) = fresh_store();
        storage.set_read_only(true);
        let created = store.add_service(new_service("Offline"));
        assert!(store.service(&created.id).is_some());
        assert!(store.flush().is_err());
        assert_eq!(storage.raw("services"), None);
    }

    fn footer_patch() -> impl Strategy<Value = FooterPatch> {
        (
            proptest::option::of("[a-z ]{0,12}"),
            proptest::option::of("[a-z@.]{0,12}"),
            proptest::option::of("[0-9 +]{0,12}"),
            proptest::option::of(proptest::collection::vec(
                ("[A-Za-z]{1,8}", "https://[a-z]{1,8}\\.com")
                    .prop_map(|(platform, url)| SocialLink { platform, url }),
                0..3,
            )),
        )
            .prop_map(|(address, email, phone, social_links)| FooterPatch {
                address,
                email,
                phone,
                social_links,
            })
    }

    proptest! {
        /// Fields named in the patch are overwritten, the rest stay.
        #[test]
        fn prop_footer_update_is_a_shallow_merge(patch in footer_patch()) {
            let (mut store, _) = fresh_store();
            let before = store.footer().clone();
            store.update_footer(patch.clone());
            let after = store.footer();

            prop_assert_eq!(&after.address, patch.address.as_ref().unwrap_or(&before.address));
            prop_assert_eq!(&after.email, patch.email.as_ref().unwrap_or(&before.email));
            prop_assert_eq!(&after.phone, patch.phone.as_ref().unwrap_or(&before.phone));
            prop_assert_eq!(&after.social_links, patch.social_links.as_ref().unwrap_or(&before.social_links));
        }

        /// The about text merges the same way.
        #[test]
        fn prop_about_update_is_a_shallow_merge(
            title in proptest::option::of("[A-Za-z ]{0,16}"),
            vision in proptest::option::of("[A-Za-z ]{0,16}"),
            values in proptest::option::of(proptest::collection::vec("[a-z]{1,6}", 0..4)),
        ) {
            let (mut store, _) = fresh_store();
            let before = store.about().clone();
            store.update_about(AboutPatch {
                title: title.clone(),
                vision: vision.clone(),
                values: values.clone(),
                ..Default::default()
            });
            let after = store.about();

            prop_assert_eq!(&after.title, title.as_ref().unwrap_or(&before.title));
            prop_assert_eq!(&after.vision, vision.as_ref().unwrap_or(&before.vision));
            prop_assert_eq!(&after.values, values.as_ref().unwrap_or(&before.values));
            prop_assert_eq!(&after.mission, &before.mission);
            prop_assert_eq!(&after.team, &before.team);
        }

        /// Added records land once, after everything already present.
        #[test]
        fn prop_added_services_append_in_order(titles in proptest::collection::vec("[A-Za-z]{1,10}", 1..6)) {
            let (mut store, _) = fresh_store();
            let existing = store.services().to_vec();
            let created: Vec<Service> = titles.iter().map(|t| store.add_service(new_service(t))).collect();

            prop_assert_eq!(&store.services()[..existing.len()], existing.as_slice());
            prop_assert_eq!(&store.services()[existing.len()..], created.as_slice());
            for service in &created {
                prop_assert_eq!(store.services().iter().filter(|s| s.id == service.id).count(), 1);
            }
        }

        /// Unknown ids never change a collection.
        #[test]
        fn prop_unknown_ids_are_no_ops(id in "[a-z]{1,8}", title in "[A-Za-z]{0,8}") {
            let (mut store, storage) = fresh_store();
            let services = store.services().to_vec();
            let patch = ServicePatch { title: Some(title), ..Default::default() };
            prop_assert!(!store.update_service(&id, patch));
            prop_assert!(!store.remove_service(&id));
            prop_assert_eq!(store.services(), services.as_slice());
            prop_assert_eq!(storage.writes(), 0);
        }
    }
}
