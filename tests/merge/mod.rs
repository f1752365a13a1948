use stack_rail::{merge_stacks, merge_wrapped, ProgramCounter, Stack, StackCarrier};

fn pcs(addrs: &[usize]) -> Stack {
    addrs.iter().copied().map(ProgramCounter::new).collect()
}

/// Minimal error chain: a stack plus an optional wrapped node.
#[derive(Debug, Default)]
struct Node {
    stack: Option<Stack>,
    inner: Option<Box<Node>>,
}

impl Node {
    fn with_stack(stack: Stack) -> Self {
        Self { stack: Some(stack), inner: None }
    }

    fn wrapping(mut self, inner: Node) -> Self {
        self.inner = Some(Box::new(inner));
        self
    }
}

impl StackCarrier for Node {
    fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    fn stack_mut(&mut self) -> Option<&mut Stack> {
        self.stack.as_mut()
    }

    fn wrapped(&self) -> Option<&dyn StackCarrier> {
        self.inner.as_deref().map(|node| node as &dyn StackCarrier)
    }

    fn wrapped_mut(&mut self) -> Option<&mut dyn StackCarrier> {
        self.inner.as_deref_mut().map(|node| node as &mut dyn StackCarrier)
    }
}

#[test]
fn shared_suffix_is_kept_once() {
    let mut outer = pcs(&[30, 2, 1]);
    let mut inner = pcs(&[11, 10, 3, 2, 1]);

    assert!(merge_stacks(&mut outer, &mut inner));
    assert_eq!(outer, pcs(&[11, 10, 3, 30, 2, 1]));
    assert!(inner.is_empty());
}

#[test]
fn inner_that_is_a_pure_prefix_adds_nothing() {
    let mut outer = pcs(&[9, 2, 1]);
    let mut inner = pcs(&[2, 1]);

    assert!(merge_stacks(&mut outer, &mut inner));
    assert_eq!(outer, pcs(&[9, 2, 1]));
    assert!(inner.is_empty());
}

#[test]
fn outer_that_is_a_pure_prefix_keeps_all_inner_frames() {
    let mut outer = pcs(&[2, 1]);
    let mut inner = pcs(&[7, 6, 2, 1]);

    assert!(merge_stacks(&mut outer, &mut inner));
    assert_eq!(outer, pcs(&[7, 6, 2, 1]));
}

#[test]
fn disjoint_stacks_are_left_alone() {
    let mut outer = pcs(&[3, 2, 1]);
    let mut inner = pcs(&[3, 2, 9]);

    assert!(!merge_stacks(&mut outer, &mut inner));
    assert_eq!(outer, pcs(&[3, 2, 1]));
    assert_eq!(inner, pcs(&[3, 2, 9]));
}

#[test]
fn empty_stacks_never_merge() {
    let mut outer = Stack::new();
    let mut inner = pcs(&[1]);
    assert!(!merge_stacks(&mut outer, &mut inner));
    assert_eq!(inner, pcs(&[1]));

    let mut outer = pcs(&[1]);
    let mut inner = Stack::new();
    assert!(!merge_stacks(&mut outer, &mut inner));
    assert_eq!(outer, pcs(&[1]));
}

#[test]
fn merging_twice_matches_merging_once() {
    let mut outer = pcs(&[30, 2, 1]);
    let mut inner = pcs(&[11, 2, 1]);

    assert!(merge_stacks(&mut outer, &mut inner));
    let once = (outer.clone(), inner.clone());

    assert!(!merge_stacks(&mut outer, &mut inner));
    assert_eq!((outer, inner), once);
}

#[test]
fn merge_wrapped_updates_both_carriers() {
    let mut chain = Node::with_stack(pcs(&[30, 2, 1]))
        .wrapping(Node::with_stack(pcs(&[11, 10, 2, 1])));

    assert!(merge_wrapped(&mut chain));
    assert_eq!(chain.stack(), Some(&pcs(&[11, 10, 30, 2, 1])));
    assert_eq!(chain.wrapped().and_then(|inner| inner.stack()), Some(&Stack::new()));

    assert!(!chain.merge_wrapped());
    assert_eq!(chain.stack(), Some(&pcs(&[11, 10, 30, 2, 1])));
}

#[test]
fn merge_wrapped_restores_inner_stack_when_nothing_is_shared() {
    let mut chain = Node::with_stack(pcs(&[3, 2, 1])).wrapping(Node::with_stack(pcs(&[8, 7])));

    assert!(!merge_wrapped(&mut chain));
    assert_eq!(chain.stack(), Some(&pcs(&[3, 2, 1])));
    assert_eq!(chain.wrapped().and_then(|inner| inner.stack()), Some(&pcs(&[8, 7])));
}

#[test]
fn merge_wrapped_skips_carriers_without_stacks() {
    let mut no_inner = Node::with_stack(pcs(&[2, 1]));
    assert!(!merge_wrapped(&mut no_inner));

    let mut stackless_inner = Node::with_stack(pcs(&[2, 1])).wrapping(Node::default());
    assert!(!merge_wrapped(&mut stackless_inner));

    let mut stackless_outer = Node::default().wrapping(Node::with_stack(pcs(&[2, 1])));
    assert!(!merge_wrapped(&mut stackless_outer));
    assert_eq!(stackless_outer.wrapped().and_then(|inner| inner.stack()), Some(&pcs(&[2, 1])));
}

#[test]
fn merge_only_looks_one_level_deep() {
    let mut chain = Node::with_stack(pcs(&[30, 1]))
        .wrapping(Node::with_stack(pcs(&[20, 1])).wrapping(Node::with_stack(pcs(&[10, 1]))));

    assert!(merge_wrapped(&mut chain));
    assert_eq!(chain.stack(), Some(&pcs(&[20, 30, 1])));

    let deepest = chain.wrapped().and_then(|inner| inner.wrapped()).and_then(|node| node.stack());
    assert_eq!(deepest, Some(&pcs(&[10, 1])));
}
