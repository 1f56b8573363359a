use json::{object::Object, JsonValue};

use crate::model::champion::{Champion, ChampionInfo};

use super::ParsingError;

pub fn parse_champions(json: &JsonValue) -> Result<Vec<Champion>, ParsingError> {
    if let JsonValue::Object(data) = &json["data"] {
        let mut champions = Vec::new();

        for (key, champ_entry) in data.iter() {
            if let JsonValue::Object(champ_obj) = champ_entry {
                champions.push(parse_champ_obj(champ_obj)?);
            } else {
                return Err(ParsingError::InvalidType(format!("data/{}", key)));
            }
        }

        return Ok(champions);
    }

    Err(ParsingError::InvalidType("data".into()))
}

fn parse_champ_obj(obj: &Object) -> Result<Champion, ParsingError> {
    let id = obj["id"].as_str().ok_or(ParsingError::InvalidType("id".into()))?;
    let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
    let image_full = obj["image"]["full"]
        .as_str()
        .ok_or(ParsingError::InvalidType("image/full".into()))?;

    let mut tags = Vec::new();
    match &obj["tags"] {
        JsonValue::Array(tag_array) => {
            for tag in tag_array {
                let tag = tag.as_str().ok_or(ParsingError::InvalidType("tags entry".into()))?;
                tags.push(tag.to_string());
            }
        }
        JsonValue::Null => {}
        _ => return Err(ParsingError::InvalidType("tags".into())),
    }

    Ok(Champion {
        id: id.into(),
        name: name.to_string(),
        tags,
        image_full: image_full.to_string(),
        info: parse_info(&obj["info"])?,
    })
}

fn parse_info(info: &JsonValue) -> Result<ChampionInfo, ParsingError> {
    if info.is_null() {
        return Ok(ChampionInfo::default());
    }

    let stat = |field: &str| -> Result<u8, ParsingError> {
        match &info[field] {
            JsonValue::Null => Ok(0),
            value => value
                .as_u8()
                .ok_or(ParsingError::InvalidType(format!("info/{}", field))),
        }
    };

    Ok(ChampionInfo {
        attack: stat("attack")?,
        defense: stat("defense")?,
        magic: stat("magic")?,
        difficulty: stat("difficulty")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "type": "champion",
        "format": "standAloneComplex",
        "version": "15.16.1",
        "data": {
            "Aatrox": {
                "version": "15.16.1",
                "id": "Aatrox",
                "key": "266",
                "name": "Aatrox",
                "title": "the Darkin Blade",
                "info": { "attack": 8, "defense": 4, "magic": 3, "difficulty": 4 },
                "image": { "full": "Aatrox.png", "sprite": "champion0.png", "group": "champion" },
                "tags": ["Fighter"],
                "partype": "Blood Well"
            },
            "Ahri": {
                "id": "Ahri",
                "name": "Ahri",
                "info": { "attack": 3, "defense": 4, "magic": 8, "difficulty": 5 },
                "image": { "full": "Ahri.png" },
                "tags": ["Mage", "Assassin"]
            },
            "MonkeyKing": {
                "id": "MonkeyKing",
                "name": "Wukong",
                "image": { "full": "MonkeyKing.png" },
                "tags": []
            }
        }
    }"#;

    #[test]
    fn parses_champions_in_document_order() {
        let json = json::parse(PAYLOAD).unwrap();
        let champions = parse_champions(&json).unwrap();

        let ids: Vec<_> = champions.iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(ids, vec!["Aatrox", "Ahri", "MonkeyKing"]);
    }

    #[test]
    fn reads_display_fields() {
        let json = json::parse(PAYLOAD).unwrap();
        let champions = parse_champions(&json).unwrap();

        let ahri = &champions[1];
        assert_eq!(ahri.name, "Ahri");
        assert_eq!(ahri.tags, vec!["Mage".to_string(), "Assassin".to_string()]);
        assert_eq!(ahri.image_full, "Ahri.png");
        assert_eq!(
            ahri.info,
            ChampionInfo {
                attack: 3,
                defense: 4,
                magic: 8,
                difficulty: 5
            }
        );

        let wukong = &champions[2];
        assert_eq!(wukong.name, "Wukong");
        assert!(wukong.tags.is_empty());
        assert_eq!(wukong.info, ChampionInfo::default());
    }

    #[test]
    fn missing_data_is_an_error() {
        let json = json::parse(r#"{"type": "champion"}"#).unwrap();
        assert!(matches!(parse_champions(&json), Err(ParsingError::InvalidType(_))));
    }

    #[test]
    fn missing_image_is_an_error() {
        let json = json::parse(r#"{"data": {"Ahri": {"id": "Ahri", "name": "Ahri", "tags": []}}}"#).unwrap();
        assert!(matches!(parse_champions(&json), Err(ParsingError::InvalidType(f)) if f == "image/full"));
    }
}
