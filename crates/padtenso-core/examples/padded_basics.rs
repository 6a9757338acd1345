//! Basic padded tensor examples.
//!
//! This example demonstrates the core functionality of padtenso-core:
//! - Creating tensors from literals, basis requests and random samples
//! - Reads under the implicit zero padding
//! - Shifting the stored window and trimming it back
//! - Arithmetic with automatic shape reconciliation
//!
//! Run with:
//! ```bash
//! cargo run --example padded_basics
//! ```

use anyhow::Result;
use padtenso_core::{DType, PaddedND};

fn main() -> Result<()> {
    println!("=== padtenso-core: Basic Examples ===\n");

    example_creation()?;
    example_padded_reads()?;
    example_shifting()?;
    example_arithmetic()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> Result<()> {
    println!("--- Example 1: Creation ---");

    let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]])?;
    println!("From a nested literal:");
    println!("{t}");
    println!("  rank {}, shape {:?}, dtype {}", t.rank(), t.shape(), t.dtype());

    let b = PaddedND::basis(&[1, 2]);
    println!("\nBasis tensor at (1, 2):");
    println!("{b}");

    let r = PaddedND::random(&[2, 3]);
    println!("\nStandard-normal samples (dtype {}):", r.dtype());
    println!("{r}");

    Ok(())
}

fn example_padded_reads() -> Result<()> {
    println!("\n--- Example 2: Padded Reads ---");

    let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]])?;
    println!("t.get(&[2, 1])        = {}", t.get(&[2, 1])?);
    println!("t.get(&[999, 238974]) = {}", t.get(&[999, 238_974])?);
    println!("t.get(&[-1, -1])      = {}", t.get(&[-1, -1])?);

    Ok(())
}

fn example_shifting() -> Result<()> {
    println!("\n--- Example 3: Shifting and Trimming ---");

    let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]])?;

    let left = t.shift_left(&[2, 1])?;
    println!("t shifted left by (2, 1):");
    println!("{left}");

    let right = t.shift_right(&[1, 2])?;
    println!("\nt shifted right by (1, 2):");
    println!("{right}");

    let trimmed = PaddedND::from_coefficients([[1i64, 0], [0, 0]])?.trim();
    println!("\n[[1, 0], [0, 0]] trimmed:");
    println!("{trimmed}");

    Ok(())
}

fn example_arithmetic() -> Result<()> {
    println!("\n--- Example 4: Arithmetic ---");

    let t = PaddedND::from_coefficients([[1i64, 2], [3, 4], [5, 6]])?;
    let s = PaddedND::from_coefficients([[7i64, 8], [9, 10]])?;

    println!("t + s (zero-extended to the larger extent):");
    println!("{}", &t + &s);

    println!("\nt * s (truncated to the overlap):");
    println!("{}", &t * &s);

    let half = &t / 2;
    println!("\nt / 2 (dtype {}):", half.dtype());
    println!("{half}");
    assert_eq!(half.dtype(), DType::Float);

    Ok(())
}
