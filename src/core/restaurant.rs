use crate::core::catalog::CatalogStore;
use crate::core::ledger::OrderLedger;
use crate::core::persistence::JsonFile;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::Order;
use crate::utils::error::Result;

/// Application context owning the menu and the order ledger.
pub struct Restaurant<S: Storage + Clone> {
    catalog: CatalogStore<S>,
    ledger: OrderLedger<S>,
}

impl<S: Storage + Clone> Restaurant<S> {
    /// Loads both collections. Missing files start empty.
    ///
    /// Dish ids kept in order snapshots stay reserved, so a dish removed from
    /// the menu never hands its id to a new one, even across restarts.
    pub fn open<C: ConfigProvider>(storage: S, config: &C) -> Self {
        tracing::debug!(
            "Opening restaurant data in {} ({}, {})",
            config.data_dir(),
            config.menu_file(),
            config.orders_file()
        );

        let mut catalog = CatalogStore::load(JsonFile::new(storage.clone(), config.menu_file()));
        let ledger = OrderLedger::load(JsonFile::new(storage, config.orders_file()));
        if let Some(id) = ledger.max_dish_id() {
            catalog.reserve_ids_through(id);
        }

        Self { catalog, ledger }
    }

    pub fn catalog(&self) -> &CatalogStore<S> {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore<S> {
        &mut self.catalog
    }

    pub fn ledger(&self) -> &OrderLedger<S> {
        &self.ledger
    }

    pub fn place_order(&mut self, customer: &str, dish_ids: &[u32]) -> Result<Order> {
        self.ledger.place(&self.catalog, customer, dish_ids)
    }

    pub fn update_order_status(&mut self, order_id: u32, new_status: &str) -> Result<Order> {
        self.ledger.set_status(order_id, new_status)
    }

    /// Writes both collections, whether or not anything changed.
    pub fn save_all(&self) -> Result<()> {
        self.catalog.save()?;
        self.ledger.save()?;
        tracing::info!("Saved menu and orders");
        Ok(())
    }
}
