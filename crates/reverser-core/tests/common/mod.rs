#![allow(dead_code)]

use reverser_core::{
    ArgumentShape, ContextError, Dialect, DynamicKind, ExecutionContext, Instruction, Jump,
    JumpAnnotation, OffsetRelationCache, OpCode, Occurrences, PrefixWidth,
};

pub const TOY: &str = "toy";

pub const X: u8 = 0x01;
pub const JUMP: u8 = 0x02;
pub const Y: u8 = 0x03;
pub const CALLX: u8 = 0x04;
pub const LIT: u8 = 0x05;
pub const BRANCH: u8 = 0x06;
pub const RETURN: u8 = 0x07;
pub const DATA16: u8 = 0x08;
pub const DATA32: u8 = 0x09;

pub static TOY_OPCODES: [OpCode; 9] = [
    OpCode::new(X, "X", "no-op", ArgumentShape::None),
    OpCode::new(JUMP, "JUMP", "relative jump", ArgumentShape::Fixed(2)),
    OpCode::new(Y, "Y", "no-op", ArgumentShape::None),
    OpCode::new(CALLX, "CALLX", "external call", ArgumentShape::Prefixed(PrefixWidth::U8)),
    OpCode::new(LIT, "LIT", "literal", ArgumentShape::VarInt),
    OpCode::new(BRANCH, "BRANCH", "branch if true", ArgumentShape::Fixed(2)),
    OpCode::new(RETURN, "RETURN", "return", ArgumentShape::None),
    OpCode::new(DATA16, "DATA16", "data", ArgumentShape::Prefixed(PrefixWidth::U16)),
    OpCode::new(DATA32, "DATA32", "data", ArgumentShape::Prefixed(PrefixWidth::U32)),
];

pub const EXTERNAL_CALLS: &str = "external-call-sites";
pub const LITERALS_20: &str = "fixed-width-byte-literal-20";

/// Dialeto mínimo para exercitar o núcleo
#[derive(Debug, Clone, Copy, Default)]
pub struct ToyDialect;

fn relative_target(instruction: &Instruction) -> Option<u32> {
    let delta = instruction.argument.as_ref()?.as_i16().ok()?;
    instruction.offset.checked_add_signed(i32::from(delta))
}

impl Dialect for ToyDialect {
    fn name(&self) -> &'static str {
        TOY
    }

    fn opcode(&self, byte: u8) -> Option<&'static OpCode> {
        TOY_OPCODES.iter().find(|opcode| opcode.raw_value == byte)
    }

    fn resolve_jump(&self, instruction: &Instruction, cache: &OffsetRelationCache) -> Option<JumpAnnotation> {
        match instruction.opcode.raw_value {
            JUMP => {
                let target = relative_target(instruction)?;
                Some(
                    JumpAnnotation::new(Jump::to_offset(target, cache.index_of(target)))
                        .with_comment(format!("Jump to 0x{:04X}", target)),
                )
            }
            BRANCH => {
                let target = relative_target(instruction)?;
                Some(JumpAnnotation::new(Jump::dynamic(
                    TOY,
                    DynamicKind::Conditional { target, taken_when: true },
                )))
            }
            RETURN => Some(JumpAnnotation::new(Jump::dynamic(TOY, DynamicKind::Return))),
            _ => None,
        }
    }

    fn register_occurrences(&self, occurrences: &mut Occurrences) {
        occurrences.register(EXTERNAL_CALLS, |instruction: &Instruction| {
            if instruction.opcode.raw_value != CALLX {
                return None;
            }
            instruction.argument.as_ref().map(|a| a.ascii())
        });
        occurrences.register(LITERALS_20, |instruction: &Instruction| {
            let argument = instruction.argument.as_ref()?;
            (argument.len() == 20).then(|| format!("0x{}", argument.hex()))
        });
    }
}

/// Contexto de execução controlado pelo teste
#[derive(Debug, Clone)]
pub struct MockContext {
    pub dialect: &'static str,
    pub current: Option<usize>,
    pub stack_top: Result<bool, ContextError>,
    pub return_offset: Result<u32, ContextError>,
}

impl MockContext {
    pub fn at(current: usize) -> Self {
        Self {
            dialect: TOY,
            current: Some(current),
            stack_top: Err(ContextError::EmptyStack),
            return_offset: Err(ContextError::EmptyFrame),
        }
    }

    pub fn with_stack_top(mut self, value: bool) -> Self {
        self.stack_top = Ok(value);
        self
    }

    pub fn with_return_offset(mut self, offset: u32) -> Self {
        self.return_offset = Ok(offset);
        self
    }
}

impl ExecutionContext for MockContext {
    fn dialect(&self) -> &str {
        self.dialect
    }

    fn current_instruction_index(&self) -> Option<usize> {
        self.current
    }

    fn call_frame_return_offset(&self) -> Result<u32, ContextError> {
        self.return_offset.clone()
    }

    fn evaluation_stack_top_bool(&self) -> Result<bool, ContextError> {
        self.stack_top.clone()
    }
}
