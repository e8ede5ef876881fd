//! Function under test and its evaluation strategies
//!
//! The function itself is tiny: add two operands, then double the sum when it
//! exceeds ten or decrement it otherwise. Besides the direct Rust version this
//! module carries two interpreted renditions of the same function, a boxed
//! expression tree and a register bytecode program, so the harness can time
//! what interpretation costs on top of the native call.
//!
//! Arithmetic wraps on overflow in every strategy, so all three agree for any
//! pair of `i32` operands regardless of the build profile.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Threshold the sum is compared against
pub const THRESHOLD: i32 = 10;

/// Number of registers in the VM register file
pub const REGISTER_COUNT: usize = 10;

/// Register the VM reads its result from once the program halts
pub const RESULT_REGISTER: usize = 9;

/// Evaluate the function under test natively.
///
/// `c = a + b`; returns `c * 2` when `c > 10`, otherwise `c - 1`.
///
/// ```rust
/// use eval_bench::eval::eval_direct;
///
/// assert_eq!(eval_direct(9, 10), 38);
/// assert_eq!(eval_direct(4, 6), 9);
/// ```
#[inline]
#[must_use]
pub const fn eval_direct(a: i32, b: i32) -> i32 {
    let c = a.wrapping_add(b);
    if c > THRESHOLD {
        c.wrapping_mul(2)
    } else {
        c.wrapping_sub(1)
    }
}

/// Which evaluator the timed loop drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Native call to [`eval_direct`]
    #[default]
    Direct,
    /// Recursive walk of an [`Expr`] tree
    Tree,
    /// Register bytecode run by [`Vm`]
    Vm,
}

impl Strategy {
    /// All strategies, in the order they are listed in help output
    pub const ALL: [Strategy; 3] = [Strategy::Direct, Strategy::Tree, Strategy::Vm];

    /// Name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Tree => "tree",
            Strategy::Vm => "vm",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a strategy name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}'")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStrategy(s.to_owned()))
    }
}

/// Expression tree evaluated by recursive descent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Value(i32),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    /// 1 if lhs > rhs, else 0
    Gt(Box<Expr>, Box<Expr>),
    /// Non-zero condition selects the first branch
    If(Box<Expr>, Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Build the tree equivalent of `eval_direct(a, b)`.
    ///
    /// The sum subtree is repeated in each position it is used, so walking the
    /// tree recomputes it just as a naive interpreter would.
    pub fn for_operands(a: i32, b: i32) -> Self {
        let sum = || Box::new(Expr::Add(Box::new(Expr::Value(a)), Box::new(Expr::Value(b))));
        Expr::If(
            Box::new(Expr::Gt(sum(), Box::new(Expr::Value(THRESHOLD)))),
            Box::new(Expr::Mul(sum(), Box::new(Expr::Value(2)))),
            Box::new(Expr::Sub(sum(), Box::new(Expr::Value(1)))),
        )
    }

    pub fn eval(&self) -> i32 {
        match self {
            Expr::Value(v) => *v,
            Expr::Add(lhs, rhs) => lhs.eval().wrapping_add(rhs.eval()),
            Expr::Sub(lhs, rhs) => lhs.eval().wrapping_sub(rhs.eval()),
            Expr::Mul(lhs, rhs) => lhs.eval().wrapping_mul(rhs.eval()),
            Expr::Gt(lhs, rhs) => i32::from(lhs.eval() > rhs.eval()),
            Expr::If(cond, then_expr, else_expr) => {
                if cond.eval() != 0 {
                    then_expr.eval()
                } else {
                    else_expr.eval()
                }
            }
        }
    }
}

/// Register machine instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instr {
    /// `Load(value, dst)`
    Load(i32, usize),
    /// `Add(r1, r2, dst)`
    Add(usize, usize, usize),
    Sub(usize, usize, usize),
    Mul(usize, usize, usize),
    /// `dst = 1` if `r1 > r2`, else `0`
    Gt(usize, usize, usize),
    /// Jump to `target` when register `cond` holds zero
    JmpIfFalse(usize, usize),
    Jmp(usize),
}

impl Instr {
    /// Registers this instruction reads or writes
    fn registers(&self) -> impl Iterator<Item = usize> {
        let regs: [Option<usize>; 3] = match *self {
            Instr::Load(_, dst) => [Some(dst), None, None],
            Instr::Add(r1, r2, dst)
            | Instr::Sub(r1, r2, dst)
            | Instr::Mul(r1, r2, dst)
            | Instr::Gt(r1, r2, dst) => [Some(r1), Some(r2), Some(dst)],
            Instr::JmpIfFalse(cond, _) => [Some(cond), None, None],
            Instr::Jmp(_) => [None, None, None],
        };
        regs.into_iter().flatten()
    }
}

/// Validated bytecode program
///
/// Every register index is checked against [`REGISTER_COUNT`] on
/// construction, and every jump must target a later instruction. With
/// forward-only jumps each run executes at most `len` instructions. A target
/// at or past the end of the program halts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    code: Vec<Instr>,
}

impl Program {
    pub fn new(code: Vec<Instr>) -> Result<Self> {
        for (pc, instr) in code.iter().enumerate() {
            if let Some(register) = instr.registers().find(|r| *r >= REGISTER_COUNT) {
                return Err(Error::InvalidProgram {
                    pc,
                    register,
                    size: REGISTER_COUNT,
                });
            }
            if let Instr::Jmp(target) | Instr::JmpIfFalse(_, target) = *instr {
                if target <= pc {
                    return Err(Error::BackwardJump { pc, target });
                }
            }
        }
        Ok(Self { code })
    }

    /// Compile `eval_direct(a, b)` to bytecode leaving the result in r9
    pub fn for_operands(a: i32, b: i32) -> Self {
        // Registers are under REGISTER_COUNT and both jumps go forward, so skip validation.
        Self {
            code: vec![
                Instr::Load(a, 0),
                Instr::Load(b, 1),
                Instr::Add(0, 1, 2),
                Instr::Load(THRESHOLD, 3),
                Instr::Gt(2, 3, 4),
                Instr::JmpIfFalse(4, 9),
                Instr::Load(2, 7),
                Instr::Mul(2, 7, RESULT_REGISTER),
                Instr::Jmp(11),
                Instr::Load(1, 6),
                Instr::Sub(2, 6, RESULT_REGISTER),
            ],
        }
    }

    pub fn instructions(&self) -> &[Instr] {
        &self.code
    }
}

/// Register VM
///
/// Registers persist between runs, matching a VM that is reused across loop
/// iterations rather than rebuilt each time.
#[derive(Debug, Clone, Default)]
pub struct Vm {
    regs: [i32; REGISTER_COUNT],
}

impl Vm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `program` from pc 0 until pc leaves it; returns r9.
    pub fn run(&mut self, program: &Program) -> i32 {
        let code = program.instructions();
        let regs = &mut self.regs;
        let mut pc = 0;
        while let Some(instr) = code.get(pc) {
            match *instr {
                Instr::Load(val, dst) => regs[dst] = val,
                Instr::Add(r1, r2, dst) => regs[dst] = regs[r1].wrapping_add(regs[r2]),
                Instr::Sub(r1, r2, dst) => regs[dst] = regs[r1].wrapping_sub(regs[r2]),
                Instr::Mul(r1, r2, dst) => regs[dst] = regs[r1].wrapping_mul(regs[r2]),
                Instr::Gt(r1, r2, dst) => regs[dst] = i32::from(regs[r1] > regs[r2]),
                Instr::JmpIfFalse(cond, target) => {
                    if regs[cond] == 0 {
                        pc = target;
                        continue;
                    }
                }
                Instr::Jmp(target) => {
                    pc = target;
                    continue;
                }
            }
            pc += 1;
        }
        regs[RESULT_REGISTER]
    }

    pub fn registers(&self) -> &[i32; REGISTER_COUNT] {
        &self.regs
    }
}

/// A strategy prepared for a fixed pair of operands
///
/// Building the tree or program happens here, outside the timed region.
#[derive(Debug, Clone)]
pub enum Evaluator {
    Direct { a: i32, b: i32 },
    Tree(Expr),
    Vm { program: Program, vm: Vm },
}

impl Evaluator {
    pub fn new(strategy: Strategy, a: i32, b: i32) -> Self {
        match strategy {
            Strategy::Direct => Evaluator::Direct { a, b },
            Strategy::Tree => Evaluator::Tree(Expr::for_operands(a, b)),
            Strategy::Vm => Evaluator::Vm {
                program: Program::for_operands(a, b),
                vm: Vm::new(),
            },
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Evaluator::Direct { .. } => Strategy::Direct,
            Evaluator::Tree(_) => Strategy::Tree,
            Evaluator::Vm { .. } => Strategy::Vm,
        }
    }

    /// Evaluate once.
    ///
    /// Operands and the prepared form go through `black_box` so that repeated
    /// calls in a loop cannot be folded into one.
    #[inline]
    pub fn eval(&mut self) -> i32 {
        use std::hint::black_box;

        match self {
            Evaluator::Direct { a, b } => eval_direct(black_box(*a), black_box(*b)),
            Evaluator::Tree(expr) => black_box(&*expr).eval(),
            Evaluator::Vm { program, vm } => vm.run(black_box(&*program)),
        }
    }
}
