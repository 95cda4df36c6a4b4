//! The interactive menu loop.
//!
//! Each cycle reads one choice, runs the matching command against the
//! [`Restaurant`], and reports the outcome. Recoverable errors are printed and
//! the loop continues; nothing partially applies because every command parses
//! all of its input before calling into the stores.

use crate::app::console::{parse_field, parse_id_list, Console};
use crate::app::display::{render_menu, render_orders};
use crate::core::restaurant::Restaurant;
use crate::core::{Availability, OrderStatus, Storage};
use crate::utils::error::{Resource, Result, ZomatoError};
use std::io::{BufRead, Write};
use std::str::FromStr;

const BANNER_RULE: &str =
    "========================================================================================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewMenu,
    AddDish,
    RemoveDish,
    UpdateAvailability,
    TakeOrder,
    UpdateOrderStatus,
    ReviewOrders,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ZomatoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ViewMenu),
            "2" => Ok(MenuChoice::AddDish),
            "3" => Ok(MenuChoice::RemoveDish),
            "4" => Ok(MenuChoice::UpdateAvailability),
            "5" => Ok(MenuChoice::TakeOrder),
            "6" => Ok(MenuChoice::UpdateOrderStatus),
            "7" => Ok(MenuChoice::ReviewOrders),
            "8" => Ok(MenuChoice::Exit),
            other => Err(ZomatoError::input("choice", format!("unknown option '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, S: Storage + Clone, R: BufRead, W: Write> {
    restaurant: &'a mut Restaurant<S>,
    console: Console<R, W>,
}

impl<'a, S: Storage + Clone, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(restaurant: &'a mut Restaurant<S>, console: Console<R, W>) -> Self {
        Self {
            restaurant,
            console,
        }
    }

    /// Runs until the exit command or end of input, then saves everything.
    pub fn run(&mut self) -> Result<()> {
        self.print_banner()?;

        loop {
            self.print_options()?;
            let choice = match self.console.prompt("\nEnter your choice (1-8): ") {
                Ok(Some(line)) => line.parse::<MenuChoice>(),
                Ok(None) => break,
                Err(e @ ZomatoError::InputError { .. }) => Err(e),
                Err(e) => return Err(e),
            };

            let choice = match choice {
                Ok(choice) => choice,
                Err(_) => {
                    self.console.error("Error: Invalid choice!")?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(?choice, category = ?e.category(), "Command rejected: {}", e);
                    self.console.error(&e.user_friendly_message())?;
                }
                Err(e) => return Err(e),
            }
        }

        self.restaurant.save_all()?;
        self.console.notice("Thank you for using Zesty Zomato!")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        tracing::debug!(?choice, "Running command");
        match choice {
            MenuChoice::ViewMenu => self.view_menu(),
            MenuChoice::AddDish => self.add_dish(),
            MenuChoice::RemoveDish => self.remove_dish(),
            MenuChoice::UpdateAvailability => self.update_dish_availability(),
            MenuChoice::TakeOrder => self.take_order(),
            MenuChoice::UpdateOrderStatus => self.update_order_status(),
            MenuChoice::ReviewOrders => self.review_orders(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        self.console.say("")?;
        self.console.say(BANNER_RULE)?;
        self.console.say("")?;
        self.console
            .say("                  🍽️   🍴   Z E S T Y   Z O M A T O    🍴   🍽️")?;
        self.console.say("")?;
        self.console.say(BANNER_RULE)?;
        Ok(())
    }

    fn print_options(&mut self) -> Result<()> {
        self.console.say("\n---- Zesty Zomato ----")?;
        self.console.say("1. View Menu")?;
        self.console.say("2. Add Dish to Menu")?;
        self.console.say("3. Remove Dish from Menu")?;
        self.console.say("4. Update Dish Availability")?;
        self.console.say("5. Take Order")?;
        self.console.say("6. Update Order Status")?;
        self.console.say("7. Review Orders")?;
        self.console.say("8. Exit")?;
        Ok(())
    }

    fn view_menu(&mut self) -> Result<Flow> {
        self.console.say("\nMenu:")?;
        let table = render_menu(self.restaurant.catalog().list());
        self.console.say(table)?;
        Ok(Flow::Continue)
    }

    fn add_dish(&mut self) -> Result<Flow> {
        self.console.say("\nAdd a New Dish to the Menu")?;
        let Some(name) = self.console.prompt("Enter the name of the dish: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(price) = self.console.prompt("Enter the price of the dish: ")? else {
            return Ok(Flow::Exit);
        };
        let price: f64 = parse_field("price", &price)?;
        let Some(availability) = self.console.prompt("Is the dish available? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };
        let availability: Availability = availability.parse()?;

        let dish = self
            .restaurant
            .catalog_mut()
            .add(&name, price, availability)?;
        self.console.success("Dish added successfully!")?;
        self.console.say(format!("Dish ID: {}", dish.id))?;
        Ok(Flow::Continue)
    }

    fn remove_dish(&mut self) -> Result<Flow> {
        self.console.say("\nRemove a Dish from the Menu")?;
        let Some(id) = self.console.prompt("Enter the ID of the dish to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let id: u32 = parse_field("dish ID", &id)?;

        self.restaurant.catalog_mut().remove(id)?;
        self.console.success("Dish removed successfully!")?;
        Ok(Flow::Continue)
    }

    fn update_dish_availability(&mut self) -> Result<Flow> {
        self.console.say("\nUpdate Dish Availability")?;
        let Some(id) = self.console.prompt("Enter the ID of the dish to update: ")? else {
            return Ok(Flow::Exit);
        };
        let id: u32 = parse_field("dish ID", &id)?;
        if self.restaurant.catalog().get(id).is_none() {
            return Err(ZomatoError::not_found(Resource::Dish, id));
        }

        let Some(availability) = self.console.prompt("Is the dish available? (yes/no): ")? else {
            return Ok(Flow::Exit);
        };
        let availability: Availability = availability.parse()?;

        self.restaurant
            .catalog_mut()
            .set_availability(id, availability)?;
        self.console.success("Dish availability updated successfully!")?;
        Ok(Flow::Continue)
    }

    fn take_order(&mut self) -> Result<Flow> {
        self.console.say("\nTake a New Order")?;
        let Some(customer) = self.console.prompt("Enter the customer name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(dishes) = self.console.prompt("Enter the dish IDs (comma-separated): ")? else {
            return Ok(Flow::Exit);
        };
        let dish_ids = parse_id_list(&dishes)?;

        let order = self.restaurant.place_order(customer.trim(), &dish_ids)?;
        self.console.success("Order placed successfully!")?;
        self.console.say(format!("Order ID: {}", order.id))?;
        self.console.say(format!("Total: {:.2}", order.total_price))?;
        Ok(Flow::Continue)
    }

    fn update_order_status(&mut self) -> Result<Flow> {
        self.console.say("\nUpdate Order Status")?;
        let Some(id) = self.console.prompt("Enter the ID of the order to update: ")? else {
            return Ok(Flow::Exit);
        };
        let id: u32 = parse_field("order ID", &id)?;
        let current = match self.restaurant.ledger().get(id) {
            Some(order) => order.status,
            None => return Err(ZomatoError::not_found(Resource::Order, id)),
        };
        self.console.say(format!("\nCurrent Status: {}", current))?;

        let choices: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
        let label = format!("Enter the new status ({}): ", choices.join(", "));
        let Some(status) = self.console.prompt(&label)? else {
            return Ok(Flow::Exit);
        };

        self.restaurant.update_order_status(id, &status)?;
        self.console.success("Order status updated successfully!")?;
        Ok(Flow::Continue)
    }

    fn review_orders(&mut self) -> Result<Flow> {
        self.console.say("\nReview Orders")?;
        let table = render_orders(self.restaurant.ledger().list());
        self.console.say(table)?;
        Ok(Flow::Continue)
    }
}
