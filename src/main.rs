//!
//! # flo_keyframes
//!
//! Command line front end for the keyframe tools: reads a scene, runs a keyframe command
//! against it and optionally writes the scene back out again.
//!

#[macro_use] extern crate log;

use flo_keyframe_commands::*;

use futures::stream;
use futures::executor;
use clap::{App, Arg, ArgMatches, SubCommand};

mod console;
use self::console::*;

use std::process;
use std::str::{FromStr};

///
/// Parses a numeric option, returning an error message if it's present but not a number
///
fn numeric_option<T: FromStr>(params: &ArgMatches, name: &str, description: &str) -> Result<Option<T>, String> {
    match params.value_of(name) {
        None        => Ok(None),
        Some(value) => T::from_str(value)
            .map(|value| Some(value))
            .map_err(|_| format!("'{}' is not a valid value for --{}: expected {}", value, name, description))
    }
}

///
/// Converts the command line parameters into the list of commands to run
///
fn commands_for_parameters(params: &ArgMatches) -> Result<Vec<KeyFrameToolCommand>, String> {
    let mut input   = vec![];

    if params.is_present("version") {
        input.push(KeyFrameToolCommand::Version);
    }

    // Read the input scene if one is specified
    if let Some(file_name) = params.value_of("input") {
        input.push(KeyFrameToolCommand::LoadScene(file_name.to_string()));
    }

    // Update the selection
    if let Some(object_name) = params.value_of("object") {
        input.push(KeyFrameToolCommand::SelectObject(object_name.to_string()));
    }

    if let Some(layer_id) = numeric_option(params, "layer", "a layer ID")? {
        input.push(KeyFrameToolCommand::SelectLayer(layer_id));
    }

    // Update the timeline
    if let Some(frame_rate) = numeric_option(params, "fps", "a frame rate")? {
        input.push(KeyFrameToolCommand::SetFrameRate(frame_rate));
    }

    if let Some(frame) = numeric_option(params, "playhead", "a frame number")? {
        input.push(KeyFrameToolCommand::SetPlayhead(frame));
    }

    // Update the scene settings
    if let Some(count) = numeric_option(params, "count", "a number of keyframes")? {
        input.push(KeyFrameToolCommand::SetFrameCount(count));
    }

    if let Some(spacing) = numeric_option(params, "spacing", "a number of frames")? {
        input.push(KeyFrameToolCommand::SetSpacing(spacing));
    }

    if params.is_present("from-playhead") {
        input.push(KeyFrameToolCommand::SetStartFromPlayhead(true));
    }

    if params.is_present("after-last-keyframe") {
        input.push(KeyFrameToolCommand::SetStartFromPlayhead(false));
    }

    // The subcommand
    match params.subcommand() {
        ("add-5", _)            => { input.push(KeyFrameToolCommand::Run("keyframes.add_5".to_string())); }
        ("add-10", _)           => { input.push(KeyFrameToolCommand::Run("keyframes.add_10".to_string())); }
        ("add-custom", _)       => { input.push(KeyFrameToolCommand::Run("keyframes.add_custom".to_string())); }
        ("run", Some(run))      => { input.push(KeyFrameToolCommand::Run(run.value_of("COMMAND").unwrap_or("").to_string())); }
        ("new-drawing", Some(new_drawing)) => { input.push(KeyFrameToolCommand::NewDrawing(new_drawing.value_of("NAME").unwrap_or("Drawing").to_string())); }
        ("add-layer", Some(add_layer))     => { input.push(KeyFrameToolCommand::AddLayer(add_layer.value_of("NAME").unwrap_or("Layer").to_string())); }
        ("time", _)             => { input.push(KeyFrameToolCommand::ShowTime); }
        ("ls-layers", _)        => { input.push(KeyFrameToolCommand::ListLayers); }
        ("ls-keyframes", _)     => { input.push(KeyFrameToolCommand::ListKeyFrames); }
        ("ls-commands", _)      => { input.push(KeyFrameToolCommand::ListCommands); }
        ("state", _)            => { input.push(KeyFrameToolCommand::DumpScene); }
        _                       => { }
    }

    // Keyframe commands move the playhead, so report where it ended up
    match params.subcommand_name() {
        Some("add-5") | Some("add-10") | Some("add-custom") | Some("run") => { input.push(KeyFrameToolCommand::ShowTime); }
        _ => { }
    }

    // Write the output scene if there is one
    if let Some(file_name) = params.value_of("output") {
        input.push(KeyFrameToolCommand::SaveScene(file_name.to_string()));
    }

    Ok(input)
}

///
/// The command line arguments this tool accepts
///
fn command_line<'a, 'b>() -> App<'a, 'b> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(concat!("Copyright 2026 ", env!("CARGO_PKG_AUTHORS")))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("Scene files are JSON. Keyframe commands report their results on stderr; ",
            "data requested with ls-*, time or state is written to stdout.\n\n",
            "Distributed under the ", env!("CARGO_PKG_LICENSE"), " license.\n"))
        .arg(Arg::with_name("version")
            .long("version")
            .help("Displays version information"))
        .arg(Arg::with_name("input")
            .long("input")
            .short("I")
            .takes_value(true)
            .help("Specifies a JSON scene file to edit (a new scene with a single drawing is used if this is not specified)"))
        .arg(Arg::with_name("output")
            .long("output")
            .short("W")
            .takes_value(true)
            .help("Writes the scene to a JSON file after the command has run"))
        .arg(Arg::with_name("object")
            .long("object")
            .short("O")
            .takes_value(true)
            .help("Selects the object with the specified name"))
        .arg(Arg::with_name("layer")
            .long("layer")
            .short("L")
            .takes_value(true)
            .help("Selects the layer with the specified ID in the selected object"))
        .arg(Arg::with_name("fps")
            .long("fps")
            .takes_value(true)
            .help("Sets the frame rate of the timeline"))
        .arg(Arg::with_name("playhead")
            .long("playhead")
            .short("F")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Moves the playhead to the specified frame before running the command"))
        .arg(Arg::with_name("count")
            .long("count")
            .short("n")
            .takes_value(true)
            .help("Sets the number of keyframes added by 'add-custom'"))
        .arg(Arg::with_name("spacing")
            .long("spacing")
            .short("s")
            .takes_value(true)
            .help("Sets the number of frames between the keyframes added by 'add-custom'"))
        .arg(Arg::with_name("from-playhead")
            .long("from-playhead")
            .help("'add-custom' starts adding keyframes at the playhead"))
        .arg(Arg::with_name("after-last-keyframe")
            .long("after-last-keyframe")
            .conflicts_with("from-playhead")
            .help("'add-custom' starts adding keyframes after the last keyframe in the layer"))
        .subcommand(SubCommand::with_name("add-5")
            .about("Adds 5 blank keyframes spaced by 2 frames, starting at the playhead"))
        .subcommand(SubCommand::with_name("add-10")
            .about("Adds 10 blank keyframes spaced by 1 frame, starting at the playhead"))
        .subcommand(SubCommand::with_name("add-custom")
            .about("Adds blank keyframes using the count, spacing and start position from the scene settings"))
        .subcommand(SubCommand::with_name("run")
            .about("Runs a keyframe command by ID (use 'ls-commands' to see the list)")
            .arg(Arg::with_name("COMMAND")
                .help("The ID of the command to run")
                .required(true)
                .index(1)))
        .subcommand(SubCommand::with_name("new-drawing")
            .about("Adds a new drawing with a single layer to the scene and selects it")
            .arg(Arg::with_name("NAME")
                .help("The name of the new drawing")
                .required(true)
                .index(1)))
        .subcommand(SubCommand::with_name("add-layer")
            .about("Adds a new layer to the selected object and makes it the active layer")
            .arg(Arg::with_name("NAME")
                .help("The name of the new layer")
                .required(true)
                .index(1)))
        .subcommand(SubCommand::with_name("time")
            .about("Shows the position of the playhead in seconds and frames"))
        .subcommand(SubCommand::with_name("ls-layers")
            .about("Lists the layers in the selected object"))
        .subcommand(SubCommand::with_name("ls-keyframes")
            .about("Lists the keyframes in the active layer"))
        .subcommand(SubCommand::with_name("ls-commands")
            .about("Lists the keyframe commands"))
        .subcommand(SubCommand::with_name("state")
            .about("Writes the scene as JSON to standard output"))
}

fn main() {
    env_logger::init();

    // Fetch the parameters
    let params = command_line().get_matches();

    // Get the input commands by parsing the parameters
    let input = match commands_for_parameters(&params) {
        Ok(input)   => input,
        Err(msg)    => {
            warn!("Could not parse the command line: {}", msg);
            eprintln!("{}\n", msg);
            process::exit(2);
        }
    };

    // Run the commands, writing the output to the console
    let succeeded = executor::block_on(run_console(flo_run_commands(stream::iter(input))));

    if !succeeded {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: Vec<&str>) -> Result<Vec<KeyFrameToolCommand>, String> {
        let params = command_line().get_matches_from_safe(args).unwrap();
        commands_for_parameters(&params)
    }

    #[test]
    fn keyframe_command_reports_time() {
        let commands = parse(vec!["flo_keyframes", "--playhead", "10", "add-5"]).unwrap();

        assert!(commands == vec![KeyFrameToolCommand::SetPlayhead(10), KeyFrameToolCommand::Run("keyframes.add_5".to_string()), KeyFrameToolCommand::ShowTime]);
    }

    #[test]
    fn non_numeric_option_is_an_error() {
        let result = parse(vec!["flo_keyframes", "--count", "many", "add-custom"]);

        assert!(result == Err("'many' is not a valid value for --count: expected a number of keyframes".to_string()));
    }
}
