//! Custom ALU Extension (Xalu).
//!
//! Ten register-register operations sharing the custom-0 major opcode.
//! The ALU sub-decoder dispatches on funct7 bits [6:5] to pick an operation
//! group, then on funct3 to pick the operation within the group.
//!
//! | funct7[6:5] | funct3 | operation |
//! |---|---|---|
//! | `00` | `100` / `110` / `101` / `111` | min / max / minu / maxu |
//! | `01` | `111` / `110` / `100` | andn / orn / xnor |
//! | `10` | `001` / `101` | rol / ror |
//! | `11` | `000` | abs (rs2 ignored) |

/// Function code 3 definitions for extension operations.
pub mod funct3;

/// Function code 7 group selectors for extension operations.
pub mod funct7;

/// Extension opcode.
pub mod opcodes;
