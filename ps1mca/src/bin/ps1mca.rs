//! Command line front-end for the PlayStation 3 Memory Card Adaptor.
//!
//! Usage:
//!   ps1mca v                verify card type (PS1 or PS2)
//!   ps1mca s                get id and classify the card (g also accepted)
//!   ps1mca p                PocketStation status probe
//!   ps1mca r [file]         read the whole card to a dump file (card.mcd)
//!   ps1mca w [first last]   write the whole card, or a frame range, from write.mcd
//!
//! Exit status: 0 on success, 1 on usage or setup errors, 2 when the card
//! rejected a write and the workflow was aborted.

use ps1mca::card::report::summarize;
use ps1mca::card::{Session, SessionConfig};
use ps1mca::constants::{CARD_SIZE, MAX_FRAME_ADDRESS};
use ps1mca::transport::usb::UsbTransport;
use ps1mca::utils::bytes_to_hex_spaced;
use ps1mca::CardKind;

use std::env;
use std::fs;
use std::process::ExitCode;

const DEFAULT_DUMP_FILE: &str = "card.mcd";
const DEFAULT_IMAGE_FILE: &str = "write.mcd";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: &[String]) -> ps1mca::Result<ExitCode> {
    let Some(selector) = args.get(1).and_then(|a| a.chars().next()) else {
        usage(args);
        return Ok(ExitCode::from(1));
    };

    match selector {
        'v' if args.len() == 2 => verify(),
        's' | 'g' if args.len() == 2 => identify(),
        'p' if args.len() == 2 => pocketstation(),
        'r' if args.len() <= 3 => read(args.get(2).map(String::as_str)),
        'w' if args.len() == 2 => write(None),
        'w' if args.len() == 4 => {
            let (Ok(first), Ok(last)) = (args[2].parse::<u16>(), args[3].parse::<u16>()) else {
                eprintln!("frame numbers must be integers, got {} {}", args[2], args[3]);
                return Ok(ExitCode::from(1));
            };
            write(Some((first, last)))
        }
        _ => {
            usage(args);
            Ok(ExitCode::from(1))
        }
    }
}

fn usage(args: &[String]) {
    let name = args.first().map(String::as_str).unwrap_or("ps1mca");
    eprintln!("usage: {} v | s | p | r [file] | w [first last]", name);
}

fn open_session() -> ps1mca::Result<Session> {
    let transport = UsbTransport::open()?;
    let mut config = SessionConfig::default();
    if let Some(delay) = env::var("PS1MCA_WRITE_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        config.write_delay_ms = delay;
    }
    Ok(Session::with_config(Box::new(transport), config))
}

fn verify() -> ps1mca::Result<ExitCode> {
    let mut session = open_session()?;
    let kind = session.verify_card()?;
    println!("{}", kind);
    if kind == CardKind::Ps2 {
        println!("PS2 cards are not supported by this driver.");
    }
    Ok(ExitCode::SUCCESS)
}

fn identify() -> ps1mca::Result<ExitCode> {
    let mut session = open_session()?;
    let (identity, response) = session.identify()?;
    println!("{}", identity);
    println!(
        "reported geometry: {} frames of {} bytes",
        response.reported_frame_count(),
        response.reported_frame_size()
    );
    Ok(ExitCode::SUCCESS)
}

fn pocketstation() -> ps1mca::Result<ExitCode> {
    let mut session = open_session()?;
    let status = session.pocketstation_status()?;
    println!("directory index: {}", status.directory_index);
    println!("com flags: {:?}", status.com_flags);
    println!("serial: {}", bytes_to_hex_spaced(&status.serial));
    println!("raw reply: {}", bytes_to_hex_spaced(status.raw()));
    Ok(ExitCode::SUCCESS)
}

fn read(path: Option<&str>) -> ps1mca::Result<ExitCode> {
    let path = path.unwrap_or(DEFAULT_DUMP_FILE);
    let mut session = open_session()?;

    let mut dump = Vec::with_capacity(CARD_SIZE);
    let reports = session.read_all(&mut dump)?;
    fs::write(path, &dump)?;

    println!("read card to {} ({})", path, summarize(&reports));
    Ok(ExitCode::SUCCESS)
}

fn write(range: Option<(u16, u16)>) -> ps1mca::Result<ExitCode> {
    let image = fs::read(DEFAULT_IMAGE_FILE)?;
    let mut session = open_session()?;

    let (first, last) = range.unwrap_or((0, MAX_FRAME_ADDRESS));
    let report = session.write_range(first, last, &image)?;

    if let Some(abort) = &report.abort {
        eprintln!("write aborted at frame {}: {}", abort.address, abort.outcome);
        eprintln!(
            "fix the condition and resume with: ps1mca w {} {}",
            abort.address, report.last
        );
        return Ok(ExitCode::from(2));
    }

    println!(
        "wrote frames {}..={} ({})",
        report.first,
        report.last,
        summarize(&report.frames)
    );
    Ok(ExitCode::SUCCESS)
}
