use crate::core::persistence::JsonFile;
use crate::core::Storage;
use crate::domain::model::{Availability, MenuItem};
use crate::utils::error::{Resource, Result, ZomatoError};
use crate::utils::validation::{validate_non_empty_string, validate_price};

/// The menu. Every mutation is written to disk before it returns.
pub struct CatalogStore<S: Storage> {
    items: Vec<MenuItem>,
    last_id: u32,
    file: JsonFile<S>,
}

impl<S: Storage> CatalogStore<S> {
    pub fn load(file: JsonFile<S>) -> Self {
        let items: Vec<MenuItem> = file.load();
        let last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        tracing::info!("Catalog ready with {} dishes", items.len());

        Self {
            items,
            last_id,
            file,
        }
    }

    /// Marks every id up to `id` as already issued, e.g. ids still held by
    /// order snapshots after their dish was removed.
    pub fn reserve_ids_through(&mut self, id: u32) {
        if id > self.last_id {
            tracing::debug!(from = self.last_id, to = id, "Raising dish id floor");
            self.last_id = id;
        }
    }

    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn add(&mut self, name: &str, price: f64, availability: Availability) -> Result<MenuItem> {
        let name = name.trim();
        validate_non_empty_string("dish name", name)?;
        let price = validate_price(price)?;
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(ZomatoError::IdsExhausted(Resource::Dish))?;

        let item = MenuItem::new(id, name, price, availability);
        self.items.push(item.clone());

        if let Err(e) = self.save() {
            self.items.pop();
            return Err(e);
        }

        self.last_id = id;
        tracing::info!(id = item.id, name = %item.name, "Dish added");
        Ok(item)
    }

    pub fn remove(&mut self, id: u32) -> Result<MenuItem> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);

        if let Err(e) = self.save() {
            self.items.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id, name = %removed.name, "Dish removed");
        Ok(removed)
    }

    pub fn set_availability(&mut self, id: u32, availability: Availability) -> Result<MenuItem> {
        let index = self.position(id)?;
        let previous = std::mem::replace(&mut self.items[index].availability, availability);

        if let Err(e) = self.save() {
            self.items[index].availability = previous;
            return Err(e);
        }

        tracing::info!(id, availability = %availability, "Dish availability updated");
        Ok(self.items[index].clone())
    }

    /// Looks up a dish that can be ordered right now.
    pub fn find_available(&self, id: u32) -> Result<&MenuItem> {
        self.get(id)
            .filter(|item| item.is_available())
            .ok_or(ZomatoError::DishUnavailable(id))
    }

    pub fn save(&self) -> Result<()> {
        self.file.save(&self.items)
    }

    fn position(&self, id: u32) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ZomatoError::not_found(Resource::Dish, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{FailingStorage, MockStorage};

    fn empty_catalog() -> (CatalogStore<MockStorage>, MockStorage) {
        let storage = MockStorage::new();
        let catalog = CatalogStore::load(JsonFile::new(storage.clone(), "menu.json"));
        (catalog, storage)
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let (mut catalog, _) = empty_catalog();

        for n in 1..=5u32 {
            let item = catalog
                .add(&format!("Dish {}", n), n as f64, Availability::Available)
                .unwrap();
            assert_eq!(item.id, n);
            assert_eq!(catalog.list().len() as u32, n);
        }
    }

    #[test]
    fn test_add_persists_immediately() {
        let (mut catalog, storage) = empty_catalog();
        catalog.add("Pizza", 10.0, Availability::Available).unwrap();

        let text = storage.get_text("menu.json").unwrap();
        assert!(text.contains("\"Pizza\""));
        assert!(text.contains("\"yes\""));
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutating() {
        let (mut catalog, storage) = empty_catalog();

        assert!(matches!(
            catalog.add("Pizza", -1.0, Availability::Available),
            Err(ZomatoError::InvalidPrice(_))
        ));
        assert!(catalog.add("   ", 1.0, Availability::Available).is_err());
        assert!(catalog.list().is_empty());
        assert!(storage.get_text("menu.json").is_none());
    }

    #[test]
    fn test_add_trims_name() {
        let (mut catalog, _) = empty_catalog();
        let item = catalog.add("  Pasta ", 8.0, Availability::Available).unwrap();
        assert_eq!(item.name, "Pasta");
    }

    #[test]
    fn test_remove_missing_id_leaves_catalog_unchanged() {
        let (mut catalog, _) = empty_catalog();
        catalog.add("Pizza", 10.0, Availability::Available).unwrap();

        let err = catalog.remove(42).unwrap_err();
        assert!(matches!(
            err,
            ZomatoError::NotFound {
                resource: Resource::Dish,
                id: 42
            }
        ));
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let (mut catalog, _) = empty_catalog();
        catalog.add("Pizza", 10.0, Availability::Available).unwrap();
        catalog.add("Soda", 2.0, Availability::Available).unwrap();
        catalog.remove(1).unwrap();

        let item = catalog.add("Salad", 6.0, Availability::Available).unwrap();
        assert_eq!(item.id, 3);
        let ids: Vec<u32> = catalog.list().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_counter_resumes_after_highest_persisted_id() {
        let storage = MockStorage::new();
        storage.put(
            "menu.json",
            br#"[{"id": 2, "name": "Soda", "price": 2.0, "availability": "yes"},
                 {"id": 7, "name": "Cake", "price": 4.0, "availability": "no"}]"#,
        );
        let mut catalog = CatalogStore::load(JsonFile::new(storage, "menu.json"));

        let item = catalog.add("Tea", 1.5, Availability::Available).unwrap();
        assert_eq!(item.id, 8);
    }

    #[test]
    fn test_reserved_ids_are_skipped() {
        let (mut catalog, _) = empty_catalog();
        catalog.add("Pizza", 10.0, Availability::Available).unwrap();
        catalog.reserve_ids_through(4);
        catalog.reserve_ids_through(2);

        let item = catalog.add("Tea", 1.5, Availability::Available).unwrap();
        assert_eq!(item.id, 5);
    }

    #[test]
    fn test_highest_possible_id_loads_but_blocks_adds() {
        let storage = MockStorage::new();
        storage.put(
            "menu.json",
            br#"[{"id": 4294967295, "name": "Cake", "price": 4.0, "availability": "yes"}]"#,
        );
        let mut catalog = CatalogStore::load(JsonFile::new(storage.clone(), "menu.json"));
        assert_eq!(catalog.list().len(), 1);

        let err = catalog.add("Tea", 1.5, Availability::Available).unwrap_err();
        assert!(matches!(err, ZomatoError::IdsExhausted(Resource::Dish)));
        assert!(err.is_recoverable());
        assert_eq!(catalog.list().len(), 1);
        assert!(!storage.get_text("menu.json").unwrap().contains("Tea"));
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let (mut catalog, storage) = empty_catalog();
        let item = catalog.add("Water", -0.0, Availability::Available).unwrap();

        assert!(item.price.is_sign_positive());
        assert!(!storage.get_text("menu.json").unwrap().contains("-0.0"));
    }

    #[test]
    fn test_set_availability() {
        let (mut catalog, _) = empty_catalog();
        catalog.add("Pizza", 10.0, Availability::Available).unwrap();

        let item = catalog.set_availability(1, Availability::Unavailable).unwrap();
        assert!(!item.is_available());
        assert!(matches!(
            catalog.set_availability(9, Availability::Available),
            Err(ZomatoError::NotFound { id: 9, .. })
        ));
    }

    #[test]
    fn test_find_available_distinguishes_unavailable() {
        let (mut catalog, _) = empty_catalog();
        catalog.add("Pizza", 10.0, Availability::Available).unwrap();
        catalog.add("Soda", 2.0, Availability::Unavailable).unwrap();

        assert_eq!(catalog.find_available(1).unwrap().name, "Pizza");
        assert!(matches!(
            catalog.find_available(2),
            Err(ZomatoError::DishUnavailable(2))
        ));
        assert!(matches!(
            catalog.find_available(3),
            Err(ZomatoError::DishUnavailable(3))
        ));
        assert!(catalog.get(2).is_some());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut catalog = CatalogStore::load(JsonFile::new(FailingStorage, "menu.json"));
        assert!(catalog.add("Pizza", 10.0, Availability::Available).is_err());
        assert!(catalog.list().is_empty());

        catalog.items.push(MenuItem::new(1, "Pizza", 10.0, Availability::Available));
        assert!(catalog.set_availability(1, Availability::Unavailable).is_err());
        assert!(catalog.list()[0].is_available());
        assert!(catalog.remove(1).is_err());
        assert_eq!(catalog.list().len(), 1);
    }
}
