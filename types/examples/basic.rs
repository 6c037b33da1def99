//! Walks a hand-built type graph and prints it under a few policies.
//!
//! Run with: cargo run --example basic

use bumpalo::Bump;
use ctir_types::{PrintingPolicy, TypeFactory, print_to_string};

fn main() {
    let arena = Bump::new();
    let f = TypeFactory::new(&arena);

    // const std::vector<_Tp *> &
    let ty = f.lvalue_ref(
        f.specialization(
            &["std"],
            "vector",
            &[f.type_arg(f.pointer(f.template_param("_Tp")))],
        )
        .with_const(),
    );

    let mut policy = PrintingPolicy::default();
    println!("default:          {}", print_to_string(ty, &policy));

    policy.fully_qualified_name = true;
    println!("fully qualified:  {}", print_to_string(ty, &policy));

    policy.clean_uglified_parameters = true;
    println!("cleaned params:   {}", print_to_string(ty, &policy));

    // A pointer to an array keeps its parentheses.
    let ptr = f.pointer(f.array(f.int(), 16));
    println!("declarator:       {}", print_to_string(ptr, &policy));
}
