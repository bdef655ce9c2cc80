use orient_protocol::{Offset, Request, Response};
use orient_rotate::rotator::{Rotator, rotation_between};
use orient_structure::block_state::{BlockState, Capabilities};

pub fn handle(request: Request, capabilities: &Capabilities) -> Response {
  match request {
    Request::RotateDirection {
      direction,
      rotation,
      mirrored,
    } => Response::RotateDirection {
      direction: Rotator::new(rotation, mirrored).apply_to_direction(direction),
    },
    Request::RotationBetween { from, to } => Response::RotationBetween {
      rotation: rotation_between(from, to),
    },
    Request::RotateOffset {
      rotation,
      mirrored,
      offset,
    } => {
      let (x, y, z) = Rotator::new(rotation, mirrored).rotate_offset(offset.x, offset.y, offset.z);
      Response::RotateOffset {
        offset: Offset { x, y, z },
      }
    }
    Request::RotateState {
      rotation,
      mirrored,
      state,
    } => match state.parse::<BlockState>() {
      Ok(parsed) => Response::RotateState {
        state: parsed
          .rotated(&Rotator::new(rotation, mirrored), capabilities)
          .to_string(),
      },
      Err(e) => {
        log::warn!("Rejecting block state `{}`: {}", state, e);
        Response::Error { message: e.to_string() }
      }
    },
    Request::Inverse { rotation, mirrored } => {
      let inverse = Rotator::new(rotation, mirrored).inverse();
      Response::Inverse {
        rotation: inverse.rotation(),
        mirrored: inverse.is_mirrored(),
      }
    }
  }
}

/// Parse one request line and answer it. Malformed requests get an error
/// response instead of ending the session.
pub fn handle_line(line: &str, capabilities: &Capabilities) -> Response {
  match serde_json::from_str::<Request>(line) {
    Ok(request) => handle(request, capabilities),
    Err(e) => {
      log::warn!("Rejecting request `{}`: {}", line.trim(), e);
      Response::Error { message: e.to_string() }
    }
  }
}
