use crate::core::catalog::CatalogStore;
use crate::core::persistence::JsonFile;
use crate::core::Storage;
use crate::domain::model::{Order, OrderStatus};
use crate::utils::error::{Resource, Result, ZomatoError};

/// Placed orders, in the order they were taken.
pub struct OrderLedger<S: Storage> {
    orders: Vec<Order>,
    last_id: u32,
    file: JsonFile<S>,
}

impl<S: Storage> OrderLedger<S> {
    pub fn load(file: JsonFile<S>) -> Self {
        let orders: Vec<Order> = file.load();
        let last_id = orders.iter().map(|order| order.id).max().unwrap_or(0);
        tracing::info!("Ledger ready with {} orders", orders.len());

        Self {
            orders,
            last_id,
            file,
        }
    }

    /// Highest dish id referenced by any order snapshot.
    pub fn max_dish_id(&self) -> Option<u32> {
        self.orders
            .iter()
            .flat_map(|order| order.items.iter().map(|item| item.id))
            .max()
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Places an order for `dish_ids`, all or nothing.
    ///
    /// Every dish is resolved against the catalog in input order before
    /// anything is recorded; the first one that is missing or unavailable
    /// rejects the whole order with [`ZomatoError::DishUnavailable`].
    pub fn place<C: Storage>(
        &mut self,
        catalog: &CatalogStore<C>,
        customer: &str,
        dish_ids: &[u32],
    ) -> Result<Order> {
        if dish_ids.is_empty() {
            return Err(ZomatoError::EmptyOrder);
        }
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(ZomatoError::IdsExhausted(Resource::Order))?;

        let items = dish_ids
            .iter()
            .map(|&id| catalog.find_available(id).cloned())
            .collect::<Result<Vec<_>>>()?;

        let order = Order::new(id, customer, items);
        self.orders.push(order.clone());

        if let Err(e) = self.save() {
            self.orders.pop();
            return Err(e);
        }

        self.last_id = id;
        tracing::info!(
            id = order.id,
            customer = %order.customer,
            items = order.items.len(),
            total = order.total_price,
            "Order placed"
        );
        Ok(order)
    }

    /// Sets the status of an order. Any recognised status is accepted from any other.
    pub fn set_status(&mut self, id: u32, new_status: &str) -> Result<Order> {
        let index = self
            .orders
            .iter()
            .position(|order| order.id == id)
            .ok_or_else(|| ZomatoError::not_found(Resource::Order, id))?;
        let status: OrderStatus = new_status.parse()?;

        let previous = std::mem::replace(&mut self.orders[index].status, status);
        if let Err(e) = self.save() {
            self.orders[index].status = previous;
            return Err(e);
        }

        tracing::info!(id, from = %previous, to = %status, "Order status updated");
        Ok(self.orders[index].clone())
    }

    pub fn save(&self) -> Result<()> {
        self.file.save(&self.orders)
    }
}
