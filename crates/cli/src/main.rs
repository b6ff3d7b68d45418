use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use booking::{BookingRequest, GuestDetails, RoomType};
use catalog::{Amenity, Catalog, GenderPolicy, Hostel};
use engine::SearchOrchestrator;
use pipeline::{FilterCriteria, SortKey};
use storage::{Accounts, RegistrationForm, Role, Store, Wishlist};

/// HostelVerse - hostel search and booking
#[derive(Parser)]
#[command(name = "hostelverse")]
#[command(about = "Search, compare and book student hostels", long_about = None)]
struct Cli {
    /// Path to a catalog JSON snapshot (built-in sample data if omitted)
    #[arg(short, long, global = true)]
    data_file: Option<PathBuf>,

    /// Directory for wishlist, bookings and session data
    #[arg(long, global = true, default_value = ".hostelverse")]
    store_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every hostel in the catalog
    List,

    /// Search hostels with filters and sorting
    Search {
        /// Area name to match (repeatable; any match keeps a listing)
        #[arg(long)]
        location: Vec<String>,

        /// Gender policy: male, female or both
        #[arg(long)]
        gender: Option<GenderPolicy>,

        /// Maximum monthly price (inclusive)
        #[arg(long)]
        max_price: Option<u32>,

        /// Minimum rating (inclusive, 0 disables)
        #[arg(long)]
        min_rating: Option<f32>,

        /// Required amenity (repeatable; a listing needs all of them)
        #[arg(long)]
        amenity: Vec<Amenity>,

        /// Free-text search over name, location and description
        #[arg(long)]
        query: Option<String>,

        /// Sort order: recommended, price-low, price-high, rating, newest
        #[arg(long, default_value = "recommended")]
        sort: SortKey,

        /// Re-run the previous search instead of the flags above
        #[arg(long)]
        last: bool,
    },

    /// Show one hostel in detail
    Show {
        /// Hostel id, e.g. hv001
        hostel_id: String,
    },

    /// Book a stay at a hostel
    Book {
        /// Hostel id, e.g. hv001
        hostel_id: String,

        /// Room type: single, double or triple
        #[arg(long, default_value = "double")]
        room_type: RoomType,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        checkin: NaiveDate,

        /// Stay duration in months
        #[arg(long, default_value = "3")]
        duration: u32,

        /// Number of students
        #[arg(long, default_value = "1")]
        students: u32,

        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        /// CNIC in XXXXX-XXXXXXX-X format
        #[arg(long)]
        cnic: String,
        #[arg(long)]
        university: String,
        #[arg(long)]
        student_id: String,
        #[arg(long)]
        emergency_name: String,
        #[arg(long)]
        emergency_phone: String,
        #[arg(long)]
        special_requests: Option<String>,
    },

    /// Show booking history
    Bookings {
        /// Show every booking for one hostel (warden view)
        #[arg(long)]
        hostel: Option<String>,
    },

    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },

    /// Register a new account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        /// Account role: student or warden
        #[arg(long, default_value = "student")]
        role: CliRole,
        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,
    },

    /// Log in (demo accounts: student@test.com / warden@test.com,
    /// password "password123")
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Keep the session across runs
        #[arg(long)]
        remember: bool,
    },

    /// Log out
    Logout,

    /// Show the active session
    Whoami,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Save a hostel
    Add { hostel_id: String },
    /// Remove a hostel
    Remove { hostel_id: String },
    /// Show saved hostels
    List,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CliRole {
    Student,
    Warden,
}

impl From<CliRole> for Role {
    fn from(role: CliRole) -> Self {
        match role {
            CliRole::Student => Role::Student,
            CliRole::Warden => Role::Warden,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog (built-in sample data unless a snapshot is given)
    let catalog = match &cli.data_file {
        Some(path) => Catalog::load_from_json(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample().context("Failed to build sample catalog")?,
    };
    let catalog = Arc::new(catalog);

    let store = Store::open(&cli.store_dir).context("Failed to open data store")?;
    let orchestrator = SearchOrchestrator::new(catalog.clone(), store.clone());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&orchestrator),
        Commands::Search {
            location,
            gender,
            max_price,
            min_rating,
            amenity,
            query,
            sort,
            last,
        } => handle_search(
            &orchestrator,
            location,
            gender,
            max_price,
            min_rating,
            amenity,
            query,
            sort,
            last,
        ),
        Commands::Show { hostel_id } => handle_show(&orchestrator, &hostel_id),
        Commands::Book {
            hostel_id,
            room_type,
            checkin,
            duration,
            students,
            first_name,
            last_name,
            email,
            phone,
            cnic,
            university,
            student_id,
            emergency_name,
            emergency_phone,
            special_requests,
        } => {
            let request = BookingRequest {
                room_type,
                checkin_date: checkin,
                duration_months: duration,
                students_count: students,
            };
            let guest = GuestDetails {
                first_name,
                last_name,
                email,
                phone,
                cnic,
                university,
                student_id,
                emergency_name,
                emergency_phone,
                special_requests,
            };
            handle_book(&orchestrator, &hostel_id, request, guest).await
        }
        Commands::Bookings { hostel } => handle_bookings(&orchestrator, hostel.as_deref()),
        Commands::Wishlist { action } => handle_wishlist(&orchestrator, &store, action),
        Commands::Register {
            first_name,
            last_name,
            email,
            phone,
            password,
            confirm_password,
            role,
            accept_terms,
        } => handle_register(
            &store,
            RegistrationForm {
                first_name,
                last_name,
                email,
                phone,
                password,
                confirm_password,
                role: role.into(),
                accepted_terms: accept_terms,
            },
        ),
        Commands::Login {
            email,
            password,
            remember,
        } => handle_login(&store, &email, &password, remember),
        Commands::Logout => handle_logout(&store),
        Commands::Whoami => handle_whoami(&store),
    }
}

/// Handle the 'list' command
fn handle_list(orchestrator: &SearchOrchestrator) -> Result<()> {
    let results = orchestrator.search(&FilterCriteria::new(), SortKey::Recommended);
    print_results(orchestrator, &results.listings, results.total)
}

/// Handle the 'search' command
#[allow(clippy::too_many_arguments)]
fn handle_search(
    orchestrator: &SearchOrchestrator,
    location: Vec<String>,
    gender: Option<GenderPolicy>,
    max_price: Option<u32>,
    min_rating: Option<f32>,
    amenity: Vec<Amenity>,
    query: Option<String>,
    sort: SortKey,
    last: bool,
) -> Result<()> {
    let (criteria, sort) = if last {
        match orchestrator.last_search() {
            Some(saved) => (saved.criteria, saved.sort),
            None => {
                println!("No previous search saved; showing everything.");
                (FilterCriteria::new(), SortKey::Recommended)
            }
        }
    } else {
        let mut criteria = FilterCriteria::new()
            .with_location_terms(location)
            .with_required_amenities(amenity)
            .with_min_rating(min_rating.unwrap_or(0.0));
        criteria.gender_policy = gender;
        criteria.max_price = max_price;
        if let Some(query) = query {
            criteria = criteria.with_search_text(query);
        }
        (criteria, sort)
    };

    let results = orchestrator.search(&criteria, sort);
    print_results(orchestrator, &results.listings, results.total)
}

/// Handle the 'show' command
fn handle_show(orchestrator: &SearchOrchestrator, hostel_id: &str) -> Result<()> {
    let Some(hostel) = orchestrator.catalog().get(hostel_id) else {
        println!("{} No hostel with id {hostel_id}", "✗".red());
        return Ok(());
    };

    println!("{}", hostel.name.bold().blue());
    println!("{}{}", "• ".green(), hostel.location);
    println!(
        "{}{} {} ({} reviews)",
        "• ".green(),
        star_rating(hostel.rating),
        hostel.rating,
        hostel.review_count
    );
    println!("{}{}", "• ".green(), hostel.gender_policy.label());
    println!(
        "{}{}",
        "• ".green(),
        hostel
            .amenities
            .iter()
            .map(|a| a.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "{}{} /month",
        "• ".cyan(),
        format_currency(hostel.price).bold()
    );
    println!("\n{}", hostel.description);
    println!("\nRoom rates:");
    for room_type in [RoomType::Single, RoomType::Double, RoomType::Triple] {
        println!(
            "  - {}: {} /month",
            room_type.label(),
            format_currency(room_type.monthly_rate())
        );
    }
    Ok(())
}

/// Handle the 'book' command
async fn handle_book(
    orchestrator: &SearchOrchestrator,
    hostel_id: &str,
    request: BookingRequest,
    guest: GuestDetails,
) -> Result<()> {
    // Surface field errors before the processing delay, the way the form
    // validates before submitting
    if let Err(err) = guest.validate() {
        if let booking::BookingError::InvalidDetails(fields) = &err {
            println!("{}", "Please fix the following fields:".yellow());
            for field in fields {
                println!("  - {field}");
            }
        }
        return Err(err.into());
    }

    println!("Processing booking...");
    let record = orchestrator.book(hostel_id, request, guest).await?;

    println!(
        "{} Booking confirmed at {}",
        "✓".green(),
        record.hostel_name.bold()
    );
    println!("{}Booking id: {}", "• ".green(), record.booking_id.bold());
    println!(
        "{}Stay: {} to {} ({} room, {} student(s))",
        "• ".green(),
        record.checkin_date,
        record.checkout_date,
        record.room_type,
        record.students_count
    );
    println!(
        "{}Room rent ({} months): {}",
        "• ".cyan(),
        record.duration_months,
        format_currency(record.quote.room_rent)
    );
    println!(
        "{}Security deposit: {}",
        "• ".cyan(),
        format_currency(record.quote.security_deposit)
    );
    println!(
        "{}Service fee: {}",
        "• ".cyan(),
        format_currency(record.quote.service_fee)
    );
    println!(
        "{}Total: {}",
        "• ".cyan(),
        format_currency(record.quote.total).bold()
    );
    println!("{}Status: {}", "• ".green(), record.status);
    Ok(())
}

/// Handle the 'bookings' command
fn handle_bookings(orchestrator: &SearchOrchestrator, hostel: Option<&str>) -> Result<()> {
    let bookings = match hostel {
        Some(hostel_id) => orchestrator.hostel_bookings(hostel_id)?,
        None => orchestrator.bookings()?,
    };

    if bookings.is_empty() {
        println!("No bookings yet.");
        return Ok(());
    }

    println!("{}", "Bookings:".bold().blue());
    for record in &bookings {
        println!(
            "{} {} — {} from {} ({} months, {}) [{}]",
            record.booking_id.bold(),
            record.hostel_name,
            record.guest.first_name,
            record.checkin_date,
            record.duration_months,
            format_currency(record.quote.total),
            record.status
        );
    }
    Ok(())
}

/// Handle the 'wishlist' command
fn handle_wishlist(
    orchestrator: &SearchOrchestrator,
    store: &Store,
    action: WishlistAction,
) -> Result<()> {
    let wishlist = Wishlist::new(store);
    match action {
        WishlistAction::Add { hostel_id } => {
            if orchestrator.catalog().get(&hostel_id).is_none() {
                println!("{} No hostel with id {hostel_id}", "✗".red());
                return Ok(());
            }
            wishlist.add(&hostel_id)?;
            println!("{} Added to wishlist", "✓".green());
        }
        WishlistAction::Remove { hostel_id } => {
            wishlist.remove(&hostel_id)?;
            println!("Removed from wishlist");
        }
        WishlistAction::List => {
            let saved = orchestrator.wishlist()?;
            if saved.is_empty() {
                println!("Wishlist is empty.");
                return Ok(());
            }
            println!("{} ({})", "Wishlist:".bold().blue(), saved.len());
            for hostel in &saved {
                println!(
                    "  {} {} — {} — {} /month",
                    hostel.id.bold(),
                    hostel.name,
                    hostel.location,
                    format_currency(hostel.price)
                );
            }
        }
    }
    Ok(())
}

/// Handle the 'register' command
fn handle_register(store: &Store, form: RegistrationForm) -> Result<()> {
    let accounts = Accounts::new(store);
    let session = accounts.register(form)?;
    println!(
        "{} Account created. Logged in as {} ({})",
        "✓".green(),
        session.name.bold(),
        session.role
    );
    Ok(())
}

/// Handle the 'login' command
fn handle_login(store: &Store, email: &str, password: &str, remember: bool) -> Result<()> {
    let accounts = Accounts::new(store);
    match accounts.login(email, password, remember) {
        Ok(session) => {
            println!(
                "{} Login successful! Welcome back, {}",
                "✓".green(),
                session.name.bold()
            );
            Ok(())
        }
        Err(storage::StorageError::InvalidCredentials) => {
            println!("{} Invalid email or password", "✗".red());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Handle the 'logout' command
fn handle_logout(store: &Store) -> Result<()> {
    Accounts::new(store).logout()?;
    println!("{} Logged out successfully", "✓".green());
    Ok(())
}

/// Handle the 'whoami' command
fn handle_whoami(store: &Store) -> Result<()> {
    match Accounts::new(store).current()? {
        Some(session) => {
            println!("{}", session.name.bold().blue());
            println!("{}Email: {}", "• ".green(), session.email);
            println!("{}Role: {}", "• ".green(), session.role);
            println!("{}Logged in at: {}", "• ".green(), session.logged_in_at);
        }
        None => println!("Not logged in."),
    }
    Ok(())
}

/// Render a result set the way the listings page does
fn print_results(
    orchestrator: &SearchOrchestrator,
    listings: &[Hostel],
    total: usize,
) -> Result<()> {
    if listings.is_empty() {
        println!("{}", "No hostels match your search.".yellow());
        println!("Try removing some filters.");
        return Ok(());
    }

    let wishlist = Wishlist::new(orchestrator.store());
    println!(
        "{}",
        format!("Showing {} of {} hostels", listings.len(), total).bold()
    );
    for (rank, hostel) in listings.iter().enumerate() {
        let heart = if wishlist.contains(&hostel.id)? {
            "♥".red().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "\n{}. {} {} {}",
            (rank + 1).to_string().green(),
            hostel.name.bold(),
            heart,
            format!("[{}]", hostel.id).dimmed()
        );
        println!("   {}", hostel.location);
        println!(
            "   {} {} ({} reviews) | {}",
            star_rating(hostel.rating),
            hostel.rating,
            hostel.review_count,
            hostel.gender_policy.label()
        );
        println!(
            "   {} | {} /month",
            hostel
                .amenities
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(", "),
            format_currency(hostel.price).bold()
        );
    }
    Ok(())
}

/// Five rating slots: full, half and empty stars
fn star_rating(rating: f32) -> String {
    let full = rating.floor() as u32;
    let has_half = rating.fract() >= 0.5;

    let mut stars = String::new();
    for slot in 1..=5 {
        if slot <= full {
            stars.push('★');
        } else if slot == full + 1 && has_half {
            stars.push('½');
        } else {
            stars.push('☆');
        }
    }
    stars
}

/// "₨ 8,000" — rupee sign plus thousands separators
fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₨ {grouped}")
}
