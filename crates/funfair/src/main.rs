//! Funfair - track paint pipeline driver
//!
//! Usage: funfair --scene <PATH> [--rotation <N>] [--json] [VIEW OPTIONS]

use std::env;
use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use funfair_paint::{
    parse_rotation, HeightUnit, ImageId, PaintBoundBox, PaintConfig, PaintSession, PaintStructId,
    ScreenCoordsXY,
};
use funfair_track::{paint_park, paint_tile};
use funfair_world::{Park, Ride, RideId, RideType, Tile, TileElement, TrackElemType, TrackElement};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options shared by the scene and element modes
#[derive(Debug, Default)]
struct Options {
    rotation: u8,
    json: bool,
    config: PaintConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return ExitCode::FAILURE;
    }

    let command = args[1].as_str();

    let result = match command {
        "--help" | "-h" => {
            print_usage(&args[0]);
            return ExitCode::SUCCESS;
        }
        "--version" | "-V" => {
            println!("Funfair {}", VERSION);
            return ExitCode::SUCCESS;
        }
        "--scene" => {
            if args.len() < 3 {
                eprintln!("Usage: {} --scene <PATH>", args[0]);
                return ExitCode::FAILURE;
            }
            parse_options(&args[3..]).and_then(|options| run_scene(&args[2], &options))
        }
        "--element" => {
            if args.len() < 3 {
                eprintln!("Usage: {} --element <NAME>", args[0]);
                return ExitCode::FAILURE;
            }
            parse_options(&args[3..]).and_then(|options| run_element(&args[2], &options))
        }
        other => Err(format!("Unknown option: {}", other)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_usage(program: &str) {
    println!(
        r#"Funfair {} - Track paint pipeline

USAGE:
    {} [OPTIONS]

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version information
    --scene <PATH>      Paint every tile of a JSON scene
    --element <NAME>    Paint a preview of one track element
    --rotation <N>      View rotation, 0 to 3
    --json              Print the draw list as JSON

VIEW OPTIONS:
    --track-heights         Draw height markers on track
    --height-unit <UNIT>    Height marker unit: units, metres or feet
    --see-through-rides     Draw ride track see-through
    --see-through-supports  Draw supports see-through
    --invisible-supports    Hide supports
    --path-issues           Highlight path issues, hiding track
    --design-ride <ID>      Only draw track of this ride

EXAMPLES:
    {} --scene scenes/loop.json
    {} --scene scenes/loop.json --rotation 2 --json
    {} --element LeftCorkscrewUp --track-heights --height-unit feet

"#,
        VERSION, program, program, program, program
    );
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--rotation" => {
                let value = args.next().ok_or("--rotation needs a value")?;
                options.rotation = parse_rotation(value).map_err(|e| e.to_string())?;
            }
            "--track-heights" => options.config.show_track_heights = true,
            "--height-unit" => {
                let value = args.next().ok_or("--height-unit needs a value")?;
                options.config.height_unit =
                    value.parse::<HeightUnit>().map_err(|e| e.to_string())?;
            }
            "--see-through-rides" => options.config.see_through_rides = true,
            "--see-through-supports" => options.config.see_through_supports = true,
            "--invisible-supports" => options.config.invisible_supports = true,
            "--path-issues" => options.config.highlight_path_issues = true,
            "--design-ride" => {
                let value = args.next().ok_or("--design-ride needs a value")?;
                let id = value.parse::<u16>().map_err(|_| format!("Invalid ride id: {}", value))?;
                options.config.track_design_save_ride = Some(RideId::new(id));
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }
    Ok(options)
}

/// Paint a scene file
fn run_scene(path: &str, options: &Options) -> Result<(), String> {
    let park = Park::load(Path::new(path)).map_err(|e| e.to_string())?;
    let mut session = PaintSession::new(options.rotation, &options.config);
    paint_park(&mut session, &park);
    print_draw_list(&session, options)
}

/// Paint every sequence of one element on a ride type that can place it,
/// one tile per sequence along the x axis
fn run_element(name: &str, options: &Options) -> Result<(), String> {
    let track_type = TrackElemType::from_name(name)
        .ok_or_else(|| format!("Unknown track element: {}", name))?;
    let ride_type = RideType::ALL
        .iter()
        .copied()
        .find(|ride_type| ride_type.descriptor().can_place(track_type))
        .ok_or_else(|| format!("No ride type can place {}", name))?;
    log::info!("Previewing {} on {}", name, ride_type.descriptor().name);

    let mut park = Park::new();
    park.add_ride(Ride::new(RideId(0), ride_type)).map_err(|e| e.to_string())?;

    let mut session = PaintSession::new(options.rotation, &options.config);
    session.is_track_piece_preview = true;
    for sequence in 0..track_type.sequence_count() {
        let element = TrackElement::new(track_type, RideId(0), ride_type)
            .with_sequence(sequence)
            .with_base_height(64);
        let tile = Tile {
            x: sequence as i32,
            y: 0,
            elements: vec![TileElement::Track(element)],
        };
        paint_tile(&mut session, &park, &tile);
    }
    print_draw_list(&session, options)
}

/// One entry of the printed draw list
#[derive(Debug, Serialize)]
struct DrawCall<'a> {
    id: PaintStructId,
    image: &'a ImageId,
    screen: ScreenCoordsXY,
    bounds: &'a PaintBoundBox,
}

fn print_draw_list(session: &PaintSession, options: &Options) -> Result<(), String> {
    let calls: Vec<DrawCall> = session
        .arrange()
        .into_iter()
        .filter_map(|id| {
            session.paint_struct(id).map(|ps| DrawCall {
                id,
                image: &ps.image,
                screen: ps.screen_pos,
                bounds: &ps.bounds,
            })
        })
        .collect();

    if options.json {
        let json = serde_json::to_string_pretty(&calls).map_err(|e| e.to_string())?;
        println!("{}", json);
        return Ok(());
    }

    for call in &calls {
        let b = call.bounds;
        println!(
            "{:>5} sprite {:>6} at ({:>5}, {:>5}) box ({}, {}, {})..({}, {}, {})",
            call.id.0,
            call.image.index(),
            call.screen.x,
            call.screen.y,
            b.x,
            b.y,
            b.z,
            b.x_end,
            b.y_end,
            b.z_end
        );
    }
    println!("{} draw calls", calls.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_options() {
        let options = parse_options(&[]).unwrap();
        assert_eq!(options.rotation, 0);
        assert!(!options.json);
        assert_eq!(options.config, PaintConfig::default());
    }

    #[test]
    fn test_view_options_fill_config() {
        let options = parse_options(&args(&[
            "--rotation",
            "2",
            "--track-heights",
            "--height-unit",
            "feet",
            "--see-through-rides",
            "--see-through-supports",
            "--invisible-supports",
            "--design-ride",
            "7",
            "--json",
        ]))
        .unwrap();
        assert_eq!(options.rotation, 2);
        assert!(options.json);
        assert!(options.config.show_track_heights);
        assert_eq!(options.config.height_unit, HeightUnit::Feet);
        assert!(options.config.see_through_rides);
        assert!(options.config.see_through_supports);
        assert!(options.config.invisible_supports);
        assert!(!options.config.highlight_path_issues);
        assert_eq!(options.config.track_design_save_ride, Some(RideId::new(7)));
    }

    #[test]
    fn test_bad_option_values() {
        let err = parse_options(&args(&["--rotation", "5"])).unwrap_err();
        assert_eq!(err, "Invalid rotation: 5 (expected 0-3)");
        let err = parse_options(&args(&["--height-unit", "cubits"])).unwrap_err();
        assert_eq!(err, "Unknown height marker unit: cubits");
        assert!(parse_options(&args(&["--rotation"])).is_err());
        assert!(parse_options(&args(&["--design-ride", "x"])).is_err());
        assert!(parse_options(&args(&["--fast"])).is_err());
    }

    #[test]
    fn test_track_heights_reach_session() {
        let options = parse_options(&args(&["--track-heights", "--height-unit", "m"])).unwrap();
        let session = PaintSession::new(options.rotation, &options.config);
        assert!(session.view_flags.contains(funfair_paint::ViewFlags::TRACK_HEIGHTS));
        assert_eq!(session.height_unit, HeightUnit::Metres);
    }
}
