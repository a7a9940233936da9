//! The fixed catalog of LLVM components forwarded to the test runner.
//!
//! The runner uses this list to decide which `needs-llvm-components` directives are satisfied. It is a literal
//! snapshot of `llvm-config --components` for the CI LLVM build and is never computed at runtime.
//!
//! ## Notes
//!
//! - Keep the list sorted and free of duplicates; `tests/catalog_guardrails.rs` enforces both.

/// Every LLVM component name the CI LLVM build provides.
pub const LLVM_COMPONENTS: &[&str] = &[
    "aarch64",
    "aarch64asmparser",
    "aarch64codegen",
    "aarch64desc",
    "aarch64disassembler",
    "aarch64info",
    "aarch64utils",
    "aggressiveinstcombine",
    "all",
    "all-targets",
    "analysis",
    "arm",
    "armasmparser",
    "armcodegen",
    "armdesc",
    "armdisassembler",
    "arminfo",
    "armutils",
    "asmparser",
    "asmprinter",
    "avr",
    "avrasmparser",
    "avrcodegen",
    "avrdesc",
    "avrdisassembler",
    "avrinfo",
    "binaryformat",
    "bitreader",
    "bitstreamreader",
    "bitwriter",
    "bpf",
    "bpfasmparser",
    "bpfcodegen",
    "bpfdesc",
    "bpfdisassembler",
    "bpfinfo",
    "cfguard",
    "codegen",
    "codegentypes",
    "core",
    "coroutines",
    "coverage",
    "debuginfocodeview",
    "debuginfodwarf",
    "debuginfomsf",
    "debuginfopdb",
    "demangle",
    "dlltooldriver",
    "engine",
    "executionengine",
    "extensions",
    "frontendopenmp",
    "globalisel",
    "hexagon",
    "hexagonasmparser",
    "hexagoncodegen",
    "hexagondesc",
    "hexagondisassembler",
    "hexagoninfo",
    "instcombine",
    "instrumentation",
    "interpreter",
    "ipo",
    "irprinter",
    "irreader",
    "libdriver",
    "lineeditor",
    "linker",
    "loongarch",
    "loongarchasmparser",
    "loongarchcodegen",
    "loongarchdesc",
    "loongarchdisassembler",
    "loongarchinfo",
    "lto",
    "m68k",
    "m68kasmparser",
    "m68kcodegen",
    "m68kdesc",
    "m68kdisassembler",
    "m68kinfo",
    "mc",
    "mcdisassembler",
    "mcjit",
    "mcparser",
    "mips",
    "mipsasmparser",
    "mipscodegen",
    "mipsdesc",
    "mipsdisassembler",
    "mipsinfo",
    "mirparser",
    "msp430",
    "msp430asmparser",
    "msp430codegen",
    "msp430desc",
    "msp430disassembler",
    "msp430info",
    "native",
    "nativecodegen",
    "nvptx",
    "nvptxcodegen",
    "nvptxdesc",
    "nvptxinfo",
    "objcarcopts",
    "object",
    "option",
    "orcjit",
    "passes",
    "powerpc",
    "powerpcasmparser",
    "powerpccodegen",
    "powerpcdesc",
    "powerpcdisassembler",
    "powerpcinfo",
    "profiledata",
    "remarks",
    "riscv",
    "riscvasmparser",
    "riscvcodegen",
    "riscvdesc",
    "riscvdisassembler",
    "riscvinfo",
    "runtimedyld",
    "scalaropts",
    "selectiondag",
    "sparc",
    "sparcasmparser",
    "sparccodegen",
    "sparcdesc",
    "sparcdisassembler",
    "sparcinfo",
    "support",
    "symbolize",
    "systemz",
    "systemzasmparser",
    "systemzcodegen",
    "systemzdesc",
    "systemzdisassembler",
    "systemzinfo",
    "target",
    "targetparser",
    "textapi",
    "transformutils",
    "vectorize",
    "webassembly",
    "webassemblyasmparser",
    "webassemblycodegen",
    "webassemblydesc",
    "webassemblydisassembler",
    "webassemblyinfo",
    "webassemblyutils",
    "windowsdriver",
    "windowsmanifest",
    "x86",
    "x86asmparser",
    "x86codegen",
    "x86desc",
    "x86disassembler",
    "x86info",
    "x86targetmca",
    "xray",
];

/// Join the catalog into the single space-separated value `--llvm-components` expects.
///
/// ## Examples
/// ```rust
/// use launcher_core::components::llvm_components_arg;
///
/// let arg = llvm_components_arg();
/// assert!(arg.starts_with("aarch64 "));
/// assert!(!arg.ends_with(' '));
/// ```
pub fn llvm_components_arg() -> String {
    LLVM_COMPONENTS.join(" ")
}
