use anyhow::Result;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use zesty_zomato::{Console, LocalStorage, OrderStatus, Restaurant, Session, Settings};

fn open(dir: &TempDir) -> Restaurant<LocalStorage> {
    let settings = Settings {
        data_dir: dir.path().to_string_lossy().into_owned(),
        ..Settings::default()
    };
    let storage = LocalStorage::new(settings.data_dir.clone());
    Restaurant::open(storage, &settings)
}

/// Feeds `script` to a fresh session and returns everything it printed.
fn run_script(restaurant: &mut Restaurant<LocalStorage>, script: impl AsRef<[u8]>) -> Result<String> {
    let mut output = Vec::new();
    {
        let console = Console::new(Cursor::new(script.as_ref().to_vec()), &mut output);
        let mut session = Session::new(restaurant, console);
        session.run()?;
    }
    Ok(String::from_utf8(output)?)
}

#[test]
fn test_full_session() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    let script = "\
2\nPizza\n10\nyes\n\
2\nSoda\n2\nno\n\
1\n\
5\nAlice\n1\n\
5\nBob\n2\n\
6\n1\ndelivered\n\
7\n\
8\n";
    let output = run_script(&mut restaurant, script)?;

    assert!(output.contains("Z E S T Y"));
    assert!(output.contains("Dish added successfully!"));
    assert!(output.contains("│ 1  │ Pizza │ 10.00 │ yes          │"));
    assert!(output.contains("Order placed successfully!"));
    assert!(output.contains("Order ID: 1"));
    assert!(output.contains("Error: Dish ID 2 is not available!"));
    assert!(output.contains("Current Status: received"));
    assert!(output.contains("Order status updated successfully!"));
    assert!(output.contains("Thank you for using Zesty Zomato!"));

    assert_eq!(restaurant.ledger().list().len(), 1);
    assert_eq!(
        restaurant.ledger().get(1).unwrap().status,
        OrderStatus::Delivered
    );
    Ok(())
}

#[test]
fn test_invalid_choice_is_reported() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    let output = run_script(&mut restaurant, "9\nhello\n8\n")?;
    assert_eq!(output.matches("Error: Invalid choice!").count(), 2);
    Ok(())
}

#[test]
fn test_undecodable_input_disregards_the_cycle() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    let output = run_script(&mut restaurant, b"\xff\n2\n\xff\n8\n")?;

    assert_eq!(output.matches("Error: Invalid choice!").count(), 1);
    assert!(output.contains("Error: Invalid input!"));
    assert!(!output.contains("Could not save data to disk"));
    assert!(output.contains("Thank you for using Zesty Zomato!"));
    assert_eq!(fs::read_to_string(dir.path().join("menu.json"))?, "[]");
    Ok(())
}

#[test]
fn test_malformed_numbers_disregard_the_cycle() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    let script = "\
2\nPizza\nten\n\
2\nPizza\n10\nperhaps\n\
3\none\n\
5\nAlice\n1,x\n\
8\n";
    let output = run_script(&mut restaurant, script)?;

    assert!(output.contains("Error: Invalid price!"));
    assert!(output.contains("Error: 'perhaps' is not a valid availability!"));
    assert!(output.contains("Error: Invalid dish ID!"));
    assert!(restaurant.catalog().list().is_empty());
    assert!(restaurant.ledger().list().is_empty());
    Ok(())
}

#[test]
fn test_missing_ids_are_reported_before_asking_for_values() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    // After "not found" the next line is read as a menu choice, not a value.
    let output = run_script(&mut restaurant, "3\n4\n4\n7\n6\n3\n8\n")?;

    assert_eq!(output.matches("Error: Dish ID not found!").count(), 2);
    assert_eq!(output.matches("Error: Order ID not found!").count(), 1);
    assert!(!output.contains("Is the dish available?"));
    assert!(!output.contains("Current Status"));
    Ok(())
}

#[test]
fn test_invalid_status_leaves_order_unchanged() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    let output = run_script(
        &mut restaurant,
        "2\nPizza\n10\nyes\n5\nAlice\n1\n6\n1\ncooking\n8\n",
    )?;

    assert!(output.contains("Error: Invalid status!"));
    assert_eq!(
        restaurant.ledger().get(1).unwrap().status,
        OrderStatus::Received
    );
    Ok(())
}

#[test]
fn test_end_of_input_saves_and_exits() -> Result<()> {
    let dir = TempDir::new()?;
    let mut restaurant = open(&dir);

    let output = run_script(&mut restaurant, "2\nPizza\n")?;

    assert!(output.contains("Thank you for using Zesty Zomato!"));
    assert!(restaurant.catalog().list().is_empty());
    assert_eq!(fs::read_to_string(dir.path().join("menu.json"))?, "[]");
    assert_eq!(fs::read_to_string(dir.path().join("orders.json"))?, "[]");
    Ok(())
}

#[test]
fn test_state_carries_over_between_sessions() -> Result<()> {
    let dir = TempDir::new()?;

    {
        let mut restaurant = open(&dir);
        run_script(&mut restaurant, "2\nPizza\n10\nyes\n8\n")?;
    }

    let mut restaurant = open(&dir);
    let output = run_script(&mut restaurant, "4\n1\nno\n1\n8\n")?;

    assert!(output.contains("Dish availability updated successfully!"));
    assert!(output.contains("│ 1  │ Pizza │ 10.00 │ no           │"));
    assert!(!restaurant.catalog().get(1).unwrap().is_available());
    Ok(())
}
