//! Ready-made Boolfuck programs.

/// Prints `Hello, world!\n` and ignores its input.
pub const HELLO_WORLD: &str = concat!(
    ";;;+;+;;+;+;",
    "+;+;+;+;;+;;+;",
    ";;+;;+;+;;+;",
    ";;+;;+;+;;+;",
    "+;;;;+;+;;+;",
    ";;+;;+;+;+;;",
    ";;;;;+;+;;",
    "+;;;+;+;;;+;",
    "+;;;;+;+;;+;",
    ";+;+;;+;;;+;",
    ";;+;;+;+;;+;",
    ";;+;+;;+;;+;",
    "+;+;;;;+;+;;",
    ";+;+;+;",
);

/// Copies a single input byte to the output.
pub const ECHO_BYTE: &str = ",;,;,;,;,;,;,;,;";

/// Writes the input bytes out in reverse order.
///
/// Bytes are read until the input runs out or a zero byte is seen, each one
/// tagged with a marker cell used to find the way back when printing.
pub const REVERSE: &str = concat!(
    ">,>,>,>,>,>,>,>,>+<<<<<<<<+[>+]<[<]>>>>>>>>>[+<<<<<<<<[>]+",
    "<[+<]>>>>>>>>>>,>,>,>,>,>,>,>,>+<<<<<<<<+[>+]<[<]>>>>>>>>>]<[+<]+<<<<<<<<+[>+]",
    "<[<]>>>>>>>>>[+<<<<<<<<[>]+<[+<]>;>;>;>;>;>;>;>;<<<<<<<<+<<<<<<<<+[>+]",
    "<[<]>>>>>>>>>]<[+<]",
);
