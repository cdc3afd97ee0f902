use flo_keyframe_commands::*;

use futures::prelude::*;

use std::io::{Write, stdout, stderr};

///
/// Sends the command output to the console, returning false if the commands stopped with a failure
///
pub fn run_console<InputStream>(command_output: InputStream) -> impl Future<Output=bool>
where InputStream: Stream<Item=KeyFrameToolOutput>+Unpin {
    async move {
        let mut command_output  = command_output;
        let mut succeeded       = true;

        // The default command output stream is stdout. The messages are sent to stderr
        let mut output_stream   = stdout();
        let mut message_stream  = stderr();

        while let Some(input) = command_output.next().await {
            use self::KeyFrameToolOutput::*;

            // Nowhere to report a failure to write to the console
            let _ = match input {
                BeginCommand(_cmd)  => { Ok(()) }
                Message(msg)        => { writeln!(message_stream, "{}", msg) }
                Warning(msg)        => { writeln!(message_stream, "WARNING: {}", msg) }
                Error(err)          => { writeln!(message_stream, "ERROR: {}", err) }
                State(_state)       => { Ok(()) }
                Output(output)      => { output_stream.write_all(output.as_bytes()) }
                FinishCommand(_cmd) => { Ok(()) }
                Failure(error)      => {
                    succeeded = false;
                    writeln!(message_stream, "ERROR: {}", error)
                }
            };
        }

        let _ = output_stream.flush();

        succeeded
    }
}
