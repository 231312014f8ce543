use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::model::{Error, ModelManager, Result};

pub const MSG_CAT_ADDED: &str = "Cat added successfully!";
pub const MSG_CAT_REMOVED: &str = "Cat removed successfully!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cat {
    pub id: String,
    pub name: String,
    pub age: Number,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatForCreate {
    pub name: String,
    pub age: Number,
}

/// The cat every fresh server starts with.
pub fn seed_cats() -> Vec<CatForCreate> {
    vec![CatForCreate {
        name: "Whiskers".to_string(),
        age: 2.into(),
    }]
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatCreated {
    pub status_code: u16,
    pub message: &'static str,
    pub new_cat: Cat,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatList {
    pub status_code: u16,
    pub data: Vec<Cat>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatRemoved {
    pub status_code: u16,
    pub message: &'static str,
    pub removed_cat: Cat,
}

pub struct CatBmc;

impl CatBmc {
    pub async fn add_cat(mm: &ModelManager, cat_c: CatForCreate) -> CatCreated {
        let mut store = mm.store().write().await;
        let new_cat = store.append(cat_c);
        debug!("{:<12} - add_cat - id {} ({} cats)", "MODEL", new_cat.id, store.len());

        CatCreated {
            status_code: StatusCode::CREATED.as_u16(),
            message: MSG_CAT_ADDED,
            new_cat,
        }
    }

    pub async fn get_cats(mm: &ModelManager) -> CatList {
        let data = mm.store().read().await.list();

        CatList {
            status_code: StatusCode::OK.as_u16(),
            data,
        }
    }

    pub async fn remove_cat(mm: &ModelManager, id: &str) -> Result<CatRemoved> {
        let mut store = mm.store().write().await;
        let removed_cat = store
            .find_index(id)
            .and_then(|index| store.remove_at(index))
            .ok_or_else(|| Error::CatNotFound { id: id.to_string() })?;
        if store.is_empty() {
            debug!("{:<12} - remove_cat - id {id} (store now empty)", "MODEL");
        } else {
            debug!("{:<12} - remove_cat - id {id} ({} cats)", "MODEL", store.len());
        }

        Ok(CatRemoved {
            status_code: StatusCode::OK.as_u16(),
            message: MSG_CAT_REMOVED,
            removed_cat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::_dev_utils;
    use crate::model::MSG_CAT_NOT_FOUND;

    fn tom() -> CatForCreate {
        CatForCreate {
            name: "Tom".to_string(),
            age: 3.into(),
        }
    }

    #[tokio::test]
    async fn test_add_cat_ok() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let before = CatBmc::get_cats(&mm).await.data.len();

        let created = CatBmc::add_cat(&mm, tom()).await;

        assert_eq!(created.status_code, 201);
        assert_eq!(created.message, "Cat added successfully!");
        assert_eq!(created.new_cat.name, "Tom");
        assert_eq!(created.new_cat.age, Number::from(3));

        let cats = CatBmc::get_cats(&mm).await.data;
        assert_eq!(cats.len(), before + 1);
        assert!(cats.contains(&created.new_cat));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_cats_in_insertion_order() -> Result<()> {
        let mm = ModelManager::new();
        assert!(CatBmc::get_cats(&mm).await.data.is_empty());

        for name in ["Tom", "Jerry", "Felix", "Garfield"] {
            CatBmc::add_cat(
                &mm,
                CatForCreate {
                    name: name.to_string(),
                    age: 1.into(),
                },
            )
            .await;
        }
        CatBmc::remove_cat(&mm, "2").await?;

        let list = CatBmc::get_cats(&mm).await;
        assert_eq!(list.status_code, 200);
        let names: Vec<_> = list.data.iter().map(|cat| cat.name.as_str()).collect();
        assert_eq!(names, vec!["Tom", "Felix", "Garfield"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_cat_twice_err_not_found() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let new_cat = CatBmc::add_cat(&mm, tom()).await.new_cat;

        let removed = CatBmc::remove_cat(&mm, &new_cat.id).await?;
        assert_eq!(removed.status_code, 200);
        assert_eq!(removed.message, "Cat removed successfully!");
        assert_eq!(removed.removed_cat.id, new_cat.id);

        let res = CatBmc::remove_cat(&mm, &new_cat.id).await;
        assert_eq!(res.unwrap_err(), Error::CatNotFound { id: new_cat.id });
        Ok(())
    }

    #[tokio::test]
    async fn test_remove_unknown_id_err_not_found() -> Result<()> {
        let mm = ModelManager::new();
        let res = CatBmc::remove_cat(&mm, "__never_assigned__").await;
        assert!(matches!(res, Err(Error::CatNotFound { .. })));

        let mm = _dev_utils::init_test().await;
        let res = CatBmc::remove_cat(&mm, "__never_assigned__").await;
        assert!(matches!(res, Err(Error::CatNotFound { ref id }) if id == "__never_assigned__"));
        assert_eq!(MSG_CAT_NOT_FOUND, "Cat not found with the given ID!");
        Ok(())
    }

    #[tokio::test]
    async fn test_seeded_scenario() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let seeded = CatBmc::get_cats(&mm).await.data;
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].id, "1");
        assert_eq!(seeded[0].name, "Whiskers");
        assert_eq!(seeded[0].age, Number::from(2));

        let new_cat = CatBmc::add_cat(&mm, tom()).await.new_cat;
        assert_ne!(new_cat.id, "1");
        assert_eq!(CatBmc::get_cats(&mm).await.data.len(), 2);

        let removed = CatBmc::remove_cat(&mm, &new_cat.id).await?;
        assert_eq!(removed.removed_cat.id, new_cat.id);
        assert!(CatBmc::remove_cat(&mm, &new_cat.id).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_removed_id_not_reassigned() -> Result<()> {
        let mm = _dev_utils::init_test().await;
        let first = CatBmc::add_cat(&mm, tom()).await.new_cat;
        CatBmc::remove_cat(&mm, &first.id).await?;

        let second = CatBmc::add_cat(&mm, tom()).await.new_cat;
        assert_ne!(second.id, first.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_concurrent_adds_get_unique_ids() -> Result<()> {
        let mm = ModelManager::new();
        let handles: Vec<_> = (0..32)
            .map(|_| {
                let mm = mm.clone();
                tokio::spawn(async move { CatBmc::add_cat(&mm, tom()).await.new_cat.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        Ok(())
    }
}
