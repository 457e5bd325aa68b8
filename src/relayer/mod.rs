/*!
   Modules for driving the external relayer binary.
*/

pub mod driver;
