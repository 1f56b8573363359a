use super::ids::ChampionId;

const IMG_BASE_URL_TEMPLATE: &str = "https://ddragon.leagueoflegends.com/cdn/{{VERSION}}/img/champion/";

/// Everything the dataset endpoint returned for one patch.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub version: String,
    pub champions: Vec<Champion>,
}

#[derive(Debug, Clone)]
pub struct Champion {
    pub id: ChampionId,
    pub name: String,
    pub tags: Vec<String>,
    pub image_full: String,
    pub info: ChampionInfo,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChampionInfo {
    pub attack: u8,
    pub defense: u8,
    pub magic: u8,
    pub difficulty: u8,
}

impl Champion {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Catalog {
    pub fn image_base_url(&self) -> String {
        IMG_BASE_URL_TEMPLATE.replace("{{VERSION}}", &self.version)
    }

    pub fn image_url(&self, champion: &Champion) -> String {
        format!("{}{}", self.image_base_url(), champion.image_full)
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures::champion, Catalog};

    #[test]
    fn image_url_substitutes_version_and_appends_file() {
        let ahri = champion("Ahri", &["Mage", "Assassin"]);
        let catalog = Catalog {
            version: "15.16.1".into(),
            champions: vec![ahri.clone()],
        };

        assert_eq!(
            catalog.image_url(&ahri),
            "https://ddragon.leagueoflegends.com/cdn/15.16.1/img/champion/Ahri.png"
        );
    }

    #[test]
    fn has_tag_is_exact() {
        let ahri = champion("Ahri", &["Mage", "Assassin"]);
        assert!(ahri.has_tag("Mage"));
        assert!(!ahri.has_tag("mage"));
        assert!(!ahri.has_tag("Tank"));
    }
}
