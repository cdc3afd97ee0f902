use super::state::*;
use super::error::*;
use super::output::*;
use super::command::*;
use super::subcommands::*;

use flo_stream::*;
use futures::prelude::*;
use futures::stream;
use futures::task::{Poll};

///
/// Runs a series of commands provided by a stream and returns a stream of the resulting output
///
pub fn flo_run_commands<InputStream>(commands: InputStream) -> impl Stream<Item=KeyFrameToolOutput>+Send+Unpin
where InputStream: 'static+Stream<Item=KeyFrameToolCommand>+Unpin+Send {
    flo_run_commands_with_state(commands, CommandState::new())
}

///
/// Runs a series of commands starting from a particular state
///
pub fn flo_run_commands_with_state<InputStream>(commands: InputStream, initial_state: CommandState) -> impl Stream<Item=KeyFrameToolOutput>+Send+Unpin
where InputStream: 'static+Stream<Item=KeyFrameToolCommand>+Unpin+Send {
    // Create the output
    let mut output_publisher    = Publisher::new(1);
    let mut output              = output_publisher.subscribe();
    let mut runner              = Some(run_commands(commands, output_publisher, initial_state).boxed());

    // Reading from the output stream causes commands to be run
    stream::poll_fn(move |context| {
        // Try to run a command
        if let Some(ref mut active_runner) = runner {
            if active_runner.poll_unpin(context) == Poll::Ready(()) {
                // Command has completed: free up the runner
                runner = None;
            }
        }

        // Try to read some output. We stop running when the output stream is no longer being read from
        output.poll_next_unpin(context)
    })
}

///
/// Runs a single command
///
fn run_command<'a>(command: KeyFrameToolCommand, output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl Future<Output=Result<(), CommandError>>+'a {
    async move {
        // Commands begin and end with a 'begin/finish' output
        output.publish(KeyFrameToolOutput::BeginCommand(command.clone())).await;

        // Dispatch the command action
        match command {
            KeyFrameToolCommand::Version                        => {
                let msg = format!("{} ({}) v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION"));

                output.publish(KeyFrameToolOutput::Message(msg)).await;
            }

            KeyFrameToolCommand::ReadState                      => { output.publish(KeyFrameToolOutput::State(state.clone())).await; }
            KeyFrameToolCommand::DumpScene                      => { dump_scene(output, state).await?; }
            KeyFrameToolCommand::LoadScene(ref path)            => { load_scene(path, output, state).await?; }
            KeyFrameToolCommand::SaveScene(ref path)            => { save_scene(path, output, state).await?; }

            KeyFrameToolCommand::NewDrawing(ref name)           => { new_drawing(name, output, state).await; }
            KeyFrameToolCommand::SelectObject(ref name)         => { select_object(name, state)?; }
            KeyFrameToolCommand::AddLayer(ref name)             => { add_layer(name, output, state).await?; }
            KeyFrameToolCommand::SelectLayer(layer_id)          => { select_layer(layer_id, state)?; }

            KeyFrameToolCommand::SetPlayhead(frame)             => { set_playhead(frame, state); }
            KeyFrameToolCommand::SetFrameRate(frame_rate)       => { set_frame_rate(frame_rate, state); }
            KeyFrameToolCommand::SetFrameCount(count)           => { update_settings(state, |settings| settings.frame_count = count); }
            KeyFrameToolCommand::SetSpacing(spacing)            => { update_settings(state, |settings| settings.spacing = spacing); }
            KeyFrameToolCommand::SetStartFromPlayhead(enabled)  => { update_settings(state, |settings| settings.start_from_playhead = enabled); }

            KeyFrameToolCommand::Run(ref command_id)            => { run_keyframe_command(command_id, output, state).await?; }
            KeyFrameToolCommand::ShowTime                       => { show_time(output, state).await; }

            KeyFrameToolCommand::ListCommands                   => { list_commands(output).await; }
            KeyFrameToolCommand::ListLayers                     => { list_layers(output, state).await; }
            KeyFrameToolCommand::ListKeyFrames                  => { list_keyframes(output, state).await; }
        }

        // Finish the command
        output.publish(KeyFrameToolOutput::FinishCommand(command.clone())).await;

        Ok(())
    }
}

///
/// Runs the specified series of commands and writes the output to the given publisher
///
fn run_commands<InputStream>(mut commands: InputStream, mut output: Publisher<KeyFrameToolOutput>, initial_state: CommandState) -> impl Future<Output=()>+Send
where InputStream: 'static+Stream<Item=KeyFrameToolCommand>+Send+Unpin {
    let mut state = initial_state;

    async move {
        while let Some(command) = commands.next().await {
            // Run the next command
            match run_command(command, &mut output, &mut state).await {
                Ok(())      => { }
                Err(err)    => {
                    // Stop running commands if we get an error
                    output.publish(KeyFrameToolOutput::Failure(err)).await;
                    break;
                }
            }
        }
    }
}
