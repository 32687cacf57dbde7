mod common;

use common::*;
use parking_lot::Mutex;
use reverser_core::{
    ContextError, DynamicKind, EdgeEmphasis, ExecutionContext, InstructionListener,
    InstructionNotifier, Jump, ReverseResult, Reverser, SubscriptionId,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// X, BRANCH +4 (para Y), RETURN, Y
fn decoded() -> ReverseResult {
    Reverser::new(ToyDialect)
        .decode(vec![X, BRANCH, 0x04, 0x00, RETURN, Y])
        .unwrap()
}

#[test]
fn test_conditional_branch_is_dynamic() {
    let result = decoded();
    match result.instructions()[1].jump.as_ref().unwrap() {
        Jump::Dynamic(dynamic) => {
            assert_eq!(dynamic.kind(), DynamicKind::Conditional { target: 5, taken_when: true });
            assert_eq!(dynamic.emphasis(), EdgeEmphasis::Inactive);
        }
        other => panic!("expected dynamic jump, got {:?}", other),
    }
}

#[test]
fn test_conditional_branch_emphasis_follows_stack_top() {
    let result = decoded();
    let branch = &result.instructions()[1];
    let jump = branch.jump.as_ref().unwrap();

    let taken = MockContext::at(1).with_stack_top(true);
    assert_eq!(branch.resolve_jump(Some(&taken)), Some(5));
    assert_eq!(jump.emphasis(), EdgeEmphasis::Taken);

    let not_taken = MockContext::at(1).with_stack_top(false);
    assert_eq!(branch.resolve_jump(Some(&not_taken)), Some(5));
    assert_eq!(jump.emphasis(), EdgeEmphasis::NotTaken);

    let elsewhere = MockContext::at(3).with_stack_top(true);
    assert_eq!(branch.resolve_jump(Some(&elsewhere)), Some(5));
    assert_eq!(jump.emphasis(), EdgeEmphasis::Inactive);
}

#[test]
fn test_dynamic_resolution_is_idempotent() {
    let result = decoded();
    let branch = &result.instructions()[1];
    let context = MockContext::at(1).with_stack_top(true);

    let first = branch.resolve_jump(Some(&context));
    let emphasis = branch.jump.as_ref().unwrap().emphasis();
    for _ in 0..3 {
        assert_eq!(branch.resolve_jump(Some(&context)), first);
        assert_eq!(branch.jump.as_ref().unwrap().emphasis(), emphasis);
    }
}

#[test]
fn test_return_resolves_only_when_live() {
    let result = decoded();
    let ret = &result.instructions()[2];

    let live = MockContext::at(2).with_return_offset(0x40);
    assert_eq!(ret.resolve_jump(Some(&live)), Some(0x40));

    let elsewhere = MockContext::at(1).with_return_offset(0x40);
    assert_eq!(ret.resolve_jump(Some(&elsewhere)), None);

    let halted = MockContext {
        current: None,
        ..MockContext::at(0).with_return_offset(0x40)
    };
    assert_eq!(ret.resolve_jump(Some(&halted)), None);
}

#[test]
fn test_context_failures_degrade_to_no_target() {
    let result = decoded();
    let branch = &result.instructions()[1];
    let ret = &result.instructions()[2];

    assert_eq!(branch.resolve_jump(None), None);
    assert_eq!(ret.resolve_jump(None), None);

    // pilha vazia na instrução corrente
    let empty_stack = MockContext::at(1);
    assert_eq!(branch.resolve_jump(Some(&empty_stack)), None);

    // frame ausente
    let empty_frame = MockContext::at(2);
    assert_eq!(ret.resolve_jump(Some(&empty_frame)), None);

    let unavailable = MockContext {
        return_offset: Err(ContextError::Unavailable),
        ..MockContext::at(2)
    };
    assert_eq!(ret.resolve_jump(Some(&unavailable)), None);
}

#[test]
fn test_failed_query_clears_stale_emphasis() {
    let result = decoded();
    let branch = &result.instructions()[1];
    let jump = branch.jump.as_ref().unwrap();
    let taken = MockContext::at(1).with_stack_top(true);

    branch.resolve_jump(Some(&taken));
    assert_eq!(jump.emphasis(), EdgeEmphasis::Taken);
    assert_eq!(branch.resolve_jump(None), None);
    assert_eq!(jump.emphasis(), EdgeEmphasis::Inactive);

    branch.resolve_jump(Some(&taken));
    assert_eq!(jump.emphasis(), EdgeEmphasis::Taken);
    assert_eq!(branch.resolve_jump(Some(&MockContext::at(1))), None);
    assert_eq!(jump.emphasis(), EdgeEmphasis::Inactive);

    branch.resolve_jump(Some(&taken));
    let other = MockContext {
        dialect: "other",
        ..MockContext::at(1).with_stack_top(true)
    };
    assert_eq!(branch.resolve_jump(Some(&other)), None);
    assert_eq!(jump.emphasis(), EdgeEmphasis::Inactive);
}

#[test]
fn test_dialect_mismatch_yields_no_target() {
    let result = decoded();
    let branch = &result.instructions()[1];
    let other = MockContext {
        dialect: "other",
        ..MockContext::at(1).with_stack_top(true)
    };
    assert_eq!(branch.resolve_jump(Some(&other)), None);
    assert_eq!(branch.jump.as_ref().unwrap().emphasis(), EdgeEmphasis::Inactive);
}

#[test]
fn test_static_jump_ignores_context() {
    let result = Reverser::new(ToyDialect).decode(vec![X, JUMP, 0xff, 0xff]).unwrap();
    let jump = &result.instructions()[1];
    assert_eq!(jump.resolve_jump(None), Some(0));
    assert_eq!(jump.resolve_jump(Some(&MockContext::at(0))), Some(0));
    assert_eq!(jump.jump.as_ref().unwrap().emphasis(), EdgeEmphasis::Taken);
}

#[test]
fn test_instructions_without_jump_resolve_to_none() {
    let result = decoded();
    assert_eq!(result.instructions()[0].resolve_jump(Some(&MockContext::at(0))), None);
}

struct MockDebugger {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Arc<dyn InstructionListener>)>>,
    current: Mutex<Option<usize>>,
    stack_top: Mutex<bool>,
}

impl MockDebugger {
    fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            listeners: Mutex::new(Vec::new()),
            current: Mutex::new(None),
            stack_top: Mutex::new(false),
        }
    }

    fn step_to(&self, index: usize, stack_top: bool) {
        *self.current.lock() = Some(index);
        *self.stack_top.lock() = stack_top;
        let listeners: Vec<_> = self.listeners.lock().iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener.on_instruction("mock-debugger", index);
        }
    }
}

impl InstructionNotifier for MockDebugger {
    fn subscribe(&self, listener: Arc<dyn InstructionListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }
}

impl ExecutionContext for MockDebugger {
    fn dialect(&self) -> &str {
        TOY
    }

    fn current_instruction_index(&self) -> Option<usize> {
        *self.current.lock()
    }

    fn call_frame_return_offset(&self) -> Result<u32, ContextError> {
        Err(ContextError::EmptyFrame)
    }

    fn evaluation_stack_top_bool(&self) -> Result<bool, ContextError> {
        Ok(*self.stack_top.lock())
    }
}

#[derive(Default)]
struct RecordingListener {
    seen: Mutex<Vec<(String, usize)>>,
}

impl InstructionListener for RecordingListener {
    fn on_instruction(&self, source: &str, instruction_index: usize) {
        self.seen.lock().push((source.to_string(), instruction_index));
    }
}

#[test]
fn test_listener_resynchronizes_jump_emphasis() {
    let result = decoded();
    let debugger = MockDebugger::new();
    let listener = Arc::new(RecordingListener::default());
    let id = debugger.subscribe(listener.clone());

    debugger.step_to(1, true);
    let branch = &result.instructions()[1];
    for (_, index) in listener.seen.lock().iter() {
        if let Some(instruction) = result.instruction(*index) {
            instruction.resolve_jump(Some(&debugger));
        }
    }
    assert_eq!(branch.jump.as_ref().unwrap().emphasis(), EdgeEmphasis::Taken);

    assert!(debugger.unsubscribe(id));
    assert!(!debugger.unsubscribe(id));
    debugger.step_to(2, false);
    assert_eq!(listener.seen.lock().as_slice(), &[("mock-debugger".to_string(), 1)]);
}
