//! Subcommand dispatch over the desk operations.
//!
//! One subcommand per invocation; every failure comes back as an error
//! message for the operator, never a panic.

use anyhow::{Result, bail};
use frontdesk_core::{CustomerPatch, HotelPatch};
use frontdesk_registry::FrontDesk;

const USAGE: &str = "\
Usage: frontdesk <command> [args]

Hotels:
  add-hotel <id> <name> <location> <rooms>
  show-hotel <id>
  modify-hotel <id> [--name <name>] [--location <location>] [--rooms <rooms>]
  delete-hotel <id>

Customers:
  add-customer <id> <name> <email>
  show-customer <id>
  modify-customer <id> [--name <name>] [--email <email>]
  delete-customer <id>

Reservations:
  reserve <reservation-id> <customer-id> <hotel-id>
  cancel <reservation-id>
  show-reservation <id>

Environment:
  FRONTDESK_DATA_DIR  directory holding the collection files";

/// Execute one subcommand, returning the operator-facing output line.
pub fn run(desk: &FrontDesk, args: &[String]) -> Result<String> {
    let Some(command) = args.first() else {
        return Ok(USAGE.to_string());
    };

    match command.as_str() {
        "add-hotel" => {
            let [id, name, location, rooms] = expect_args(&args[1..])?;
            let rooms: u32 = rooms
                .parse()
                .map_err(|_| anyhow::anyhow!("rooms must be a non-negative integer"))?;
            let hotel = desk.register_hotel(id, name, location, rooms)?;
            Ok(format!("Added hotel: {hotel}"))
        }
        "show-hotel" => {
            let [id] = expect_args(&args[1..])?;
            match desk.hotels().display(id) {
                Some(line) => Ok(line),
                None => bail!("hotel '{id}' not found"),
            }
        }
        "modify-hotel" => {
            let (id, flags) = split_flags(&args[1..])?;
            let mut patch = HotelPatch::default();
            for (flag, value) in flags {
                match flag.as_str() {
                    "--name" => patch.name = Some(value),
                    "--location" => patch.location = Some(value),
                    "--rooms" => {
                        patch.rooms_available = Some(value.parse().map_err(|_| {
                            anyhow::anyhow!("--rooms must be a non-negative integer")
                        })?)
                    }
                    other => bail!("unknown flag '{other}' for modify-hotel"),
                }
            }
            if !desk.hotels().modify(id, &patch) {
                bail!("hotel '{id}' not found");
            }
            Ok(format!("Modified hotel '{id}'"))
        }
        "delete-hotel" => {
            let [id] = expect_args(&args[1..])?;
            if !desk.hotels().delete(id) {
                bail!("hotel '{id}' not found");
            }
            Ok(format!("Deleted hotel '{id}'"))
        }
        "add-customer" => {
            let [id, name, email] = expect_args(&args[1..])?;
            let customer = desk.register_customer(id, name, email)?;
            Ok(format!("Added customer: {customer}"))
        }
        "show-customer" => {
            let [id] = expect_args(&args[1..])?;
            match desk.customers().display(id) {
                Some(line) => Ok(line),
                None => bail!("customer '{id}' not found"),
            }
        }
        "modify-customer" => {
            let (id, flags) = split_flags(&args[1..])?;
            let mut patch = CustomerPatch::default();
            for (flag, value) in flags {
                match flag.as_str() {
                    "--name" => patch.name = Some(value),
                    "--email" => patch.email = Some(value),
                    other => bail!("unknown flag '{other}' for modify-customer"),
                }
            }
            if !desk.customers().modify(id, &patch) {
                bail!("customer '{id}' not found");
            }
            Ok(format!("Modified customer '{id}'"))
        }
        "delete-customer" => {
            let [id] = expect_args(&args[1..])?;
            if !desk.customers().delete(id) {
                bail!("customer '{id}' not found");
            }
            Ok(format!("Deleted customer '{id}'"))
        }
        "reserve" => {
            let [reservation_id, customer_id, hotel_id] = expect_args(&args[1..])?;
            let reservation = desk.reserve(reservation_id, customer_id, hotel_id)?;
            Ok(format!("Reserved: {reservation}"))
        }
        "cancel" => {
            let [id] = expect_args(&args[1..])?;
            let reservation = desk.cancel(id)?;
            Ok(format!("Cancelled: {reservation}"))
        }
        "show-reservation" => {
            let [id] = expect_args(&args[1..])?;
            match desk.reservations().display(id) {
                Some(line) => Ok(line),
                None => bail!("reservation '{id}' not found"),
            }
        }
        "help" | "--help" | "-h" => Ok(USAGE.to_string()),
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    }
}

/// Require exactly `N` positional arguments.
fn expect_args<const N: usize>(args: &[String]) -> Result<[&str; N]> {
    if args.len() != N {
        bail!("expected {N} argument(s), got {}", args.len());
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

/// Split `<id> (--flag value)*` into the id and its flag pairs.
fn split_flags(args: &[String]) -> Result<(&str, Vec<(String, String)>)> {
    let Some(id) = args.first() else {
        bail!("expected an id argument");
    };

    let rest = &args[1..];
    if rest.len() % 2 != 0 {
        bail!("flags must come in '--flag value' pairs");
    }

    let mut flags = Vec::with_capacity(rest.len() / 2);
    for pair in rest.chunks(2) {
        if !pair[0].starts_with("--") {
            bail!("expected a flag, got '{}'", pair[0]);
        }
        flags.push((pair[0].clone(), pair[1].clone()));
    }

    Ok((id.as_str(), flags))
}
