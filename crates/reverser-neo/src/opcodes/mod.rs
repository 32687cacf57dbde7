use once_cell::sync::Lazy;
use reverser_core::{ArgumentShape, OpCode, PrefixWidth, StaticOpCodeTable};

pub const PUSH0: u8 = 0x00;
pub const PUSHDATA1: u8 = 0x4c;
pub const PUSHDATA2: u8 = 0x4d;
pub const PUSHDATA4: u8 = 0x4e;
pub const JMP: u8 = 0x62;
pub const JMPIF: u8 = 0x63;
pub const JMPIFNOT: u8 = 0x64;
pub const CALL: u8 = 0x65;
pub const RET: u8 = 0x66;
pub const APPCALL: u8 = 0x67;
pub const SYSCALL: u8 = 0x68;
pub const TAILCALL: u8 = 0x69;

macro_rules! push_bytes {
    ($($n:literal),* $(,)?) => {
        [$(
            OpCode::new(
                $n,
                concat!("PUSHBYTES", stringify!($n)),
                concat!("The next ", stringify!($n), " bytes are pushed onto the stack."),
                ArgumentShape::Fixed($n),
            ),
        )*]
    };
}

/// PUSHBYTES1 ..= PUSHBYTES75 (0x01 ..= 0x4B)
static PUSH_BYTES: [OpCode; 75] = push_bytes!(
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71,
    72, 73, 74, 75,
);

static OPCODES: &[OpCode] = &[
    // Constants
    OpCode::new(PUSH0, "PUSH0", "An empty array of bytes is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(PUSHDATA1, "PUSHDATA1", "The next byte contains the number of bytes to be pushed onto the stack.", ArgumentShape::Prefixed(PrefixWidth::U8)),
    OpCode::new(PUSHDATA2, "PUSHDATA2", "The next two bytes contain the number of bytes to be pushed onto the stack.", ArgumentShape::Prefixed(PrefixWidth::U16)),
    OpCode::new(PUSHDATA4, "PUSHDATA4", "The next four bytes contain the number of bytes to be pushed onto the stack.", ArgumentShape::Prefixed(PrefixWidth::U32)),
    OpCode::new(0x4f, "PUSHM1", "The number -1 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x51, "PUSH1", "The number 1 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x52, "PUSH2", "The number 2 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x53, "PUSH3", "The number 3 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x54, "PUSH4", "The number 4 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x55, "PUSH5", "The number 5 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x56, "PUSH6", "The number 6 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x57, "PUSH7", "The number 7 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x58, "PUSH8", "The number 8 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x59, "PUSH9", "The number 9 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x5a, "PUSH10", "The number 10 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x5b, "PUSH11", "The number 11 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x5c, "PUSH12", "The number 12 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x5d, "PUSH13", "The number 13 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x5e, "PUSH14", "The number 14 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x5f, "PUSH15", "The number 15 is pushed onto the stack.", ArgumentShape::None),
    OpCode::new(0x60, "PUSH16", "The number 16 is pushed onto the stack.", ArgumentShape::None),
    // Flow control
    OpCode::new(0x61, "NOP", "Does nothing.", ArgumentShape::None),
    OpCode::new(JMP, "JMP", "Jumps by the signed 16-bit offset relative to this instruction.", ArgumentShape::Fixed(2)),
    OpCode::new(JMPIF, "JMPIF", "Jumps if the top stack item is true.", ArgumentShape::Fixed(2)),
    OpCode::new(JMPIFNOT, "JMPIFNOT", "Jumps if the top stack item is false.", ArgumentShape::Fixed(2)),
    OpCode::new(CALL, "CALL", "Calls the function at the signed 16-bit relative offset.", ArgumentShape::Fixed(2)),
    OpCode::new(RET, "RET", "Returns to the calling frame.", ArgumentShape::None),
    OpCode::new(APPCALL, "APPCALL", "Calls the contract identified by the 20-byte script hash.", ArgumentShape::Fixed(20)),
    OpCode::new(SYSCALL, "SYSCALL", "Calls the interop service named by the argument.", ArgumentShape::VarInt),
    OpCode::new(TAILCALL, "TAILCALL", "Tail-calls the contract identified by the 20-byte script hash.", ArgumentShape::Fixed(20)),
    // Stack
    OpCode::new(0x6a, "DUPFROMALTSTACK", "Duplicates the top alt stack item onto the main stack.", ArgumentShape::None),
    OpCode::new(0x6b, "TOALTSTACK", "Moves the top item to the alt stack.", ArgumentShape::None),
    OpCode::new(0x6c, "FROMALTSTACK", "Moves the top alt stack item to the main stack.", ArgumentShape::None),
    OpCode::new(0x6d, "XDROP", "Removes the item n back in the stack.", ArgumentShape::None),
    OpCode::new(0x72, "XSWAP", "Swaps the top item with the item n back.", ArgumentShape::None),
    OpCode::new(0x73, "XTUCK", "Copies the top item to position n.", ArgumentShape::None),
    OpCode::new(0x74, "DEPTH", "Puts the number of stack items onto the stack.", ArgumentShape::None),
    OpCode::new(0x75, "DROP", "Removes the top stack item.", ArgumentShape::None),
    OpCode::new(0x76, "DUP", "Duplicates the top stack item.", ArgumentShape::None),
    OpCode::new(0x77, "NIP", "Removes the second-to-top stack item.", ArgumentShape::None),
    OpCode::new(0x78, "OVER", "Copies the second-to-top item to the top.", ArgumentShape::None),
    OpCode::new(0x79, "PICK", "Copies the item n back to the top.", ArgumentShape::None),
    OpCode::new(0x7a, "ROLL", "Moves the item n back to the top.", ArgumentShape::None),
    OpCode::new(0x7b, "ROT", "Rotates the top three items to the left.", ArgumentShape::None),
    OpCode::new(0x7c, "SWAP", "Swaps the top two items.", ArgumentShape::None),
    OpCode::new(0x7d, "TUCK", "Copies the top item before the second-to-top item.", ArgumentShape::None),
    // Splice
    OpCode::new(0x7e, "CAT", "Concatenates two byte arrays.", ArgumentShape::None),
    OpCode::new(0x7f, "SUBSTR", "Returns a section of a byte array.", ArgumentShape::None),
    OpCode::new(0x80, "LEFT", "Keeps only characters left of the given point.", ArgumentShape::None),
    OpCode::new(0x81, "RIGHT", "Keeps only characters right of the given point.", ArgumentShape::None),
    OpCode::new(0x82, "SIZE", "Pushes the length of the top byte array.", ArgumentShape::None),
    // Bitwise logic
    OpCode::new(0x83, "INVERT", "Flips all bits of the input.", ArgumentShape::None),
    OpCode::new(0x84, "AND", "Boolean and between each bit.", ArgumentShape::None),
    OpCode::new(0x85, "OR", "Boolean or between each bit.", ArgumentShape::None),
    OpCode::new(0x86, "XOR", "Boolean exclusive or between each bit.", ArgumentShape::None),
    OpCode::new(0x87, "EQUAL", "Returns 1 if the inputs are exactly equal.", ArgumentShape::None),
    // Arithmetic
    OpCode::new(0x8b, "INC", "Adds 1 to the input.", ArgumentShape::None),
    OpCode::new(0x8c, "DEC", "Subtracts 1 from the input.", ArgumentShape::None),
    OpCode::new(0x8d, "SIGN", "Pushes the sign of the input.", ArgumentShape::None),
    OpCode::new(0x8f, "NEGATE", "Flips the sign of the input.", ArgumentShape::None),
    OpCode::new(0x90, "ABS", "Makes the input positive.", ArgumentShape::None),
    OpCode::new(0x91, "NOT", "Boolean negation.", ArgumentShape::None),
    OpCode::new(0x92, "NZ", "Returns 0 if the input is 0, 1 otherwise.", ArgumentShape::None),
    OpCode::new(0x93, "ADD", "a is added to b.", ArgumentShape::None),
    OpCode::new(0x94, "SUB", "b is subtracted from a.", ArgumentShape::None),
    OpCode::new(0x95, "MUL", "a is multiplied by b.", ArgumentShape::None),
    OpCode::new(0x96, "DIV", "a is divided by b.", ArgumentShape::None),
    OpCode::new(0x97, "MOD", "Returns the remainder after dividing a by b.", ArgumentShape::None),
    OpCode::new(0x98, "SHL", "Shifts a left b bits.", ArgumentShape::None),
    OpCode::new(0x99, "SHR", "Shifts a right b bits.", ArgumentShape::None),
    OpCode::new(0x9a, "BOOLAND", "Returns 1 if both a and b are not 0.", ArgumentShape::None),
    OpCode::new(0x9b, "BOOLOR", "Returns 1 if a or b is not 0.", ArgumentShape::None),
    OpCode::new(0x9c, "NUMEQUAL", "Returns 1 if the numbers are equal.", ArgumentShape::None),
    OpCode::new(0x9e, "NUMNOTEQUAL", "Returns 1 if the numbers are not equal.", ArgumentShape::None),
    OpCode::new(0x9f, "LT", "Returns 1 if a is less than b.", ArgumentShape::None),
    OpCode::new(0xa0, "GT", "Returns 1 if a is greater than b.", ArgumentShape::None),
    OpCode::new(0xa1, "LTE", "Returns 1 if a is less than or equal to b.", ArgumentShape::None),
    OpCode::new(0xa2, "GTE", "Returns 1 if a is greater than or equal to b.", ArgumentShape::None),
    OpCode::new(0xa3, "MIN", "Returns the smaller of a and b.", ArgumentShape::None),
    OpCode::new(0xa4, "MAX", "Returns the larger of a and b.", ArgumentShape::None),
    OpCode::new(0xa5, "WITHIN", "Returns 1 if x is within the specified range.", ArgumentShape::None),
    // Crypto
    OpCode::new(0xa7, "SHA1", "The input is hashed using SHA-1.", ArgumentShape::None),
    OpCode::new(0xa8, "SHA256", "The input is hashed using SHA-256.", ArgumentShape::None),
    OpCode::new(0xa9, "HASH160", "The input is hashed using SHA-256 then RIPEMD-160.", ArgumentShape::None),
    OpCode::new(0xaa, "HASH256", "The input is hashed twice with SHA-256.", ArgumentShape::None),
    OpCode::new(0xac, "CHECKSIG", "Verifies a signature against the script container.", ArgumentShape::None),
    OpCode::new(0xad, "VERIFY", "Verifies a signature against a message.", ArgumentShape::None),
    OpCode::new(0xae, "CHECKMULTISIG", "Verifies several signatures against public keys.", ArgumentShape::None),
    // Array
    OpCode::new(0xc0, "ARRAYSIZE", "Pushes the size of the array.", ArgumentShape::None),
    OpCode::new(0xc1, "PACK", "Packs n items into an array.", ArgumentShape::None),
    OpCode::new(0xc2, "UNPACK", "Unpacks an array onto the stack.", ArgumentShape::None),
    OpCode::new(0xc3, "PICKITEM", "Pushes the item at the given index or key.", ArgumentShape::None),
    OpCode::new(0xc4, "SETITEM", "Sets the item at the given index or key.", ArgumentShape::None),
    OpCode::new(0xc5, "NEWARRAY", "Creates an array of the given size.", ArgumentShape::None),
    OpCode::new(0xc6, "NEWSTRUCT", "Creates a struct of the given size.", ArgumentShape::None),
    OpCode::new(0xc7, "NEWMAP", "Creates an empty map.", ArgumentShape::None),
    OpCode::new(0xc8, "APPEND", "Appends an item to an array.", ArgumentShape::None),
    OpCode::new(0xc9, "REVERSE", "Reverses an array in place.", ArgumentShape::None),
    OpCode::new(0xca, "REMOVE", "Removes the item at the given index or key.", ArgumentShape::None),
    OpCode::new(0xcb, "HASKEY", "Pushes whether the collection has the given key.", ArgumentShape::None),
    OpCode::new(0xcc, "KEYS", "Pushes the keys of a map.", ArgumentShape::None),
    OpCode::new(0xcd, "VALUES", "Pushes the values of a collection.", ArgumentShape::None),
    // Dynamic invocation
    OpCode::new(0xe0, "CALL_I", "Calls a relative function with explicit return and parameter counts.", ArgumentShape::Fixed(4)),
    OpCode::new(0xe1, "CALL_E", "Calls a contract with explicit return and parameter counts.", ArgumentShape::Fixed(22)),
    OpCode::new(0xe2, "CALL_ED", "Calls a contract taken from the stack.", ArgumentShape::Fixed(2)),
    OpCode::new(0xe3, "CALL_ET", "Tail-calls a contract with explicit return and parameter counts.", ArgumentShape::Fixed(22)),
    OpCode::new(0xe4, "CALL_EDT", "Tail-calls a contract taken from the stack.", ArgumentShape::Fixed(2)),
    // Exceptions
    OpCode::new(0xf0, "THROW", "Halts execution with a fault.", ArgumentShape::None),
    OpCode::new(0xf1, "THROWIFNOT", "Faults unless the top stack item is true.", ArgumentShape::None),
];

/// NEO (v2) opcode table, built once per process.
pub static NEO_OPCODES: Lazy<StaticOpCodeTable> = Lazy::new(|| {
    let mut table = StaticOpCodeTable::new();
    table.extend(&PUSH_BYTES);
    table.extend(OPCODES);
    table
});

/// Looks up a NEO opcode by its raw byte.
pub fn opcode(byte: u8) -> Option<&'static OpCode> {
    NEO_OPCODES.get(byte)
}
