use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterInfo {
    pub address: String,
    pub email: String,
    pub phone: String,
    pub social_links: Vec<SocialLink>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub photo: String,
    pub bio: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AboutInfo {
    pub title: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub values: Vec<String>,
    pub team: Vec<TeamMember>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceIcon {
    Building,
    FileText,
    Truck,
    Code,
}

impl ServiceIcon {
    pub const ALL: [ServiceIcon; 4] = [
        ServiceIcon::Building,
        ServiceIcon::FileText,
        ServiceIcon::Truck,
        ServiceIcon::Code,
    ];

    /// Name as stored and as used in `<select>` values.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceIcon::Building => "building",
            ServiceIcon::FileText => "file-text",
            ServiceIcon::Truck => "truck",
            ServiceIcon::Code => "code",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == name)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::Building => "🏢",
            ServiceIcon::FileText => "📄",
            ServiceIcon::Truck => "🚚",
            ServiceIcon::Code => "💻",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub details: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Partner {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub client: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub result: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
}

/// Records kept in an id-keyed, insertion-ordered collection.
pub trait Record {
    type Patch;

    fn id(&self) -> &str;
    fn apply(&mut self, patch: Self::Patch);
}

// Partial updates. `None` leaves a field alone; for optional fields
// `Some(None)` clears the value.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FooterPatch {
    pub address: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub social_links: Option<Vec<SocialLink>>,
}

impl FooterInfo {
    pub fn apply(&mut self, patch: FooterPatch) {
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(social_links) = patch.social_links {
            self.social_links = social_links;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AboutPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub values: Option<Vec<String>>,
    pub team: Option<Vec<TeamMember>>,
}

impl AboutInfo {
    pub fn apply(&mut self, patch: AboutPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(mission) = patch.mission {
            self.mission = mission;
        }
        if let Some(vision) = patch.vision {
            self.vision = vision;
        }
        if let Some(values) = patch.values {
            self.values = values;
        }
        if let Some(team) = patch.team {
            self.team = team;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewService {
    pub title: String,
    pub description: String,
    pub icon: ServiceIcon,
    pub details: String,
}

impl NewService {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_required(&[
            ("Title", self.title.as_str()),
            ("Description", self.description.as_str()),
        ])
    }

    pub fn into_service(self, id: String) -> Service {
        Service {
            id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            details: self.details,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<ServiceIcon>,
    pub details: Option<String>,
}

impl From<NewService> for ServicePatch {
    fn from(new: NewService) -> Self {
        Self {
            title: Some(new.title),
            description: Some(new.description),
            icon: Some(new.icon),
            details: Some(new.details),
        }
    }
}

impl Record for Service {
    type Patch = ServicePatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: ServicePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(icon) = patch.icon {
            self.icon = icon;
        }
        if let Some(details) = patch.details {
            self.details = details;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPartner {
    pub name: String,
    pub logo: String,
    pub description: String,
    pub website: Option<String>,
}

impl NewPartner {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_required(&[
            ("Name", self.name.as_str()),
            ("Logo", self.logo.as_str()),
            ("Description", self.description.as_str()),
        ])
    }

    pub fn into_partner(self, id: String) -> Partner {
        Partner {
            id,
            name: self.name,
            logo: self.logo,
            description: self.description,
            website: self.website,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartnerPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub website: Option<Option<String>>,
}

impl From<NewPartner> for PartnerPatch {
    fn from(new: NewPartner) -> Self {
        Self {
            name: Some(new.name),
            logo: Some(new.logo),
            description: Some(new.description),
            website: Some(new.website),
        }
    }
}

impl Record for Partner {
    type Patch = PartnerPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: PartnerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(website) = patch.website {
            self.website = website;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewCaseStudy {
    pub title: String,
    pub client: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub result: String,
    pub images: Vec<String>,
    pub partner_id: Option<String>,
}

impl NewCaseStudy {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing_required(&[
            ("Title", self.title.as_str()),
            ("Client", self.client.as_str()),
            ("Description", self.description.as_str()),
        ])
    }

    pub fn into_case_study(self, id: String) -> CaseStudy {
        CaseStudy {
            id,
            title: self.title,
            client: self.client,
            description: self.description,
            challenge: self.challenge,
            solution: self.solution,
            result: self.result,
            images: self.images,
            partner_id: self.partner_id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaseStudyPatch {
    pub title: Option<String>,
    pub client: Option<String>,
    pub description: Option<String>,
    pub challenge: Option<String>,
    pub solution: Option<String>,
    pub result: Option<String>,
    pub images: Option<Vec<String>>,
    pub partner_id: Option<Option<String>>,
}

impl From<NewCaseStudy> for CaseStudyPatch {
    fn from(new: NewCaseStudy) -> Self {
        Self {
            title: Some(new.title),
            client: Some(new.client),
            description: Some(new.description),
            challenge: Some(new.challenge),
            solution: Some(new.solution),
            result: Some(new.result),
            images: Some(new.images),
            partner_id: Some(new.partner_id),
        }
    }
}

impl Record for CaseStudy {
    type Patch = CaseStudyPatch;

    fn id(&self) -> &str {
        &self.id
    }

    fn apply(&mut self, patch: CaseStudyPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(client) = patch.client {
            self.client = client;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(challenge) = patch.challenge {
            self.challenge = challenge;
        }
        if let Some(solution) = patch.solution {
            self.solution = solution;
        }
        if let Some(result) = patch.result {
            self.result = result;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(partner_id) = patch.partner_id {
            self.partner_id = partner_id;
        }
    }
}

/// Labels of the fields whose value is empty after trimming.
pub fn missing_required(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_icons_use_kebab_case_names() {
        for icon in ServiceIcon::ALL {
            let encoded = serde_json::to_value(icon).unwrap();
            assert_eq!(encoded, json!(icon.as_str()));
            assert_eq!(ServiceIcon::from_name(icon.as_str()), Some(icon));
        }
        assert_eq!(ServiceIcon::from_name("rocket"), None);
    }

    #[test]
    fn case_study_json_uses_camel_case_and_omits_missing_partner() {
        let study = CaseStudy {
            id: "7".into(),
            title: "t".into(),
            client: "c".into(),
            description: "d".into(),
            challenge: "ch".into(),
            solution: "s".into(),
            result: "r".into(),
            images: vec!["/a.png".into()],
            partner_id: Some("1".into()),
        };
        let value = serde_json::to_value(&study).unwrap();
        assert_eq!(value["partnerId"], json!("1"));

        let unlinked = CaseStudy { partner_id: None, ..study };
        let value = serde_json::to_value(&unlinked).unwrap();
        assert!(value.get("partnerId").is_none());
    }

    #[test]
    fn footer_reads_social_links_key() {
        let footer: FooterInfo = serde_json::from_value(json!({
            "address": "a",
            "email": "e",
            "phone": "p",
            "socialLinks": [{"platform": "LinkedIn", "url": "https://linkedin.com"}]
        }))
        .unwrap();
        assert_eq!(footer.social_links[0].platform, "LinkedIn");
    }

    #[test]
    fn partner_patch_can_clear_website() {
        let mut partner = Partner {
            id: "1".into(),
            name: "n".into(),
            logo: "l".into(),
            description: "d".into(),
            website: Some("https://example.com".into()),
        };
        partner.apply(PartnerPatch { website: Some(None), ..Default::default() });
        assert_eq!(partner.website, None);
        assert_eq!(partner.name, "n");
    }

    #[test]
    fn required_fields_ignore_whitespace_only_values() {
        let new = NewService {
            title: "  ".into(),
            description: "Something".into(),
            icon: ServiceIcon::Code,
            details: String::new(),
        };
        assert_eq!(new.missing_fields(), vec!["Title"]);
    }
}
